quantity!(
    /// Vietnamese đồng. The smallest unit in circulation is one đồng, so the precision is 0.
    Dong, via: f64, suffix: "₫", precision: 0
);
