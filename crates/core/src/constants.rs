/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Maximum fractional digits accepted for expense and budget amounts
pub const MONEY_SCALE: u32 = 2;

/// Maximum fractional digits accepted for crypto holding quantities
pub const CRYPTO_QUANTITY_SCALE: u32 = 8;

/// Largest absolute value accepted for an expense or budget amount
pub const MAX_MONEY_AMOUNT: i64 = 1_000_000_000_000;

/// Largest crypto holding quantity accepted
pub const MAX_CRYPTO_QUANTITY: i64 = 1_000_000_000_000;

/// Number of expenses returned in the dashboard's recent list
pub const RECENT_EXPENSES_LIMIT: usize = 10;

/// Quote currency used for crypto valuation
pub const VALUATION_CURRENCY: &str = "USD";

/// Household created by the demo seed
pub const DEFAULT_HOUSEHOLD_ID: &str = "default-household";

/// Description used when an expense is created only from receipt hints
pub const RECEIPT_EXPENSE_DESCRIPTION: &str = "Receipt expense";
