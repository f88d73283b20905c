// business hours, local wall clock
pub const DEFAULT_OPEN_HOUR: u32 = 8;
pub const DEFAULT_CLOSE_HOUR: u32 = 18;

// gaps shorter than this are not worth showing to the front desk
pub const DEFAULT_MIN_GAP_MINUTES: u32 = 20;

// anchor day plus the following two
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 3;

pub const DEFAULT_GAP_LIMIT: usize = 5;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;

// a year and a day; longer windows are not a dashboard query
pub const MAX_LOOKAHEAD_DAYS: u32 = 366;
