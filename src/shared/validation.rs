use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Protocol code shown to the citizen after a submission
    /// - Demonstration: "DEMO-" followed by six uppercase alphanumerics
    /// - Backend-stored: "GRL-", the submission date as YYYYMMDD, then six uppercase alphanumerics
    /// - Valid: "DEMO-A1B2C3", "GRL-20251014-0F9E8D"
    /// - Invalid: "DEMO-a1b2c3", "DEMO-A1B2C", "GRL-2025-A1B2C3"
    pub static ref PROTOCOL_CODE_REGEX: Regex =
        Regex::new(r"^(?:DEMO|GRL-[0-9]{8})-[A-Z0-9]{6}$").unwrap();
}
