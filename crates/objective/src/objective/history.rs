use zeroth_core::Value;

/// Append-only record of evaluated values, in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct History {
    values: Vec<Value>,
    best: Option<Value>,
}

/// Returns true if `value` replaces the running minimum `best`.
///
/// `None` stands for the positive infinity the running minimum starts from.
/// That start compares on the objective component, so a constrained value
/// with a finite objective replaces it. Otherwise a value replaces the best
/// only when it compares strictly less: NaN, and mixed scalar and
/// constrained entries, never do.
fn improves(value: Value, best: Option<Value>) -> bool {
    match best {
        None => value.objective() < f64::INFINITY,
        Some(current) => value < current,
    }
}

impl History {
    pub(super) fn push(&mut self, value: Value) {
        if improves(value, self.best) {
            self.best = Some(value);
        }
        self.values.push(value);
    }

    pub(super) fn values(&self) -> &[Value] {
        &self.values
    }

    /// The current running minimum, or `None` while it is still infinite.
    pub(super) fn best(&self) -> Option<Value> {
        self.best
    }

    pub(super) fn clear(&mut self) {
        self.values.clear();
        self.best = None;
    }

    pub(super) fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
    }

    /// Running minimum of the recorded values, index-aligned with `values`.
    ///
    /// Entries before the first improvement read `Scalar(+inf)`.
    pub(super) fn best_so_far(&self) -> Vec<Value> {
        let mut best: Option<Value> = None;
        self.values
            .iter()
            .map(|&value| {
                if improves(value, best) {
                    best = Some(value);
                }
                best.unwrap_or(Value::Scalar(f64::INFINITY))
            })
            .collect()
    }
}
