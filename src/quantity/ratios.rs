quantity!(Percentage, via: f64, suffix: "%", precision: 1);

impl Percentage {
    pub const FULL: Self = Self(100.0);

    /// Express `part` as a percentage of `whole`.
    pub fn of(part: f64, whole: f64) -> Self {
        Self(part / whole * 100.0)
    }
}
