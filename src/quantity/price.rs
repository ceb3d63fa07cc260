quantity!(
    /// Retail electricity price.
    KilowattHourPrice, via: f64, suffix: "₫/kWh", precision: 0
);
