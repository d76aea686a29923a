use crate::Value;

/// A candidate point together with its evaluation result and lineage payloads.
///
/// Solutions are produced by an objective from a point and an optional parent,
/// then mutated by evaluation and resampling. The caller owns them; the
/// objective only keeps their values in its history.
///
/// `A` is the attachment type, inherited from the parent at construction.
/// `P` is the post-attachment type, recomputed after every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A = (), P = ()> {
    point: Vec<f64>,
    value: Option<Value>,
    attachment: Option<A>,
    post_attachment: Option<P>,
    resample_value: Option<f64>,
}

impl<A, P> Solution<A, P> {
    /// Creates an unevaluated solution at `point` with no payloads.
    #[must_use]
    pub fn new(point: Vec<f64>) -> Self {
        Self {
            point,
            value: None,
            attachment: None,
            post_attachment: None,
            resample_value: None,
        }
    }

    #[must_use]
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    pub fn set_point(&mut self, point: Vec<f64>) {
        self.point = point;
    }

    /// Returns the recorded value, or `None` before the first evaluation.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Returns true once a value has been recorded.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    pub fn attachment(&self) -> Option<&A> {
        self.attachment.as_ref()
    }

    pub fn set_attachment(&mut self, attachment: Option<A>) {
        self.attachment = attachment;
    }

    #[must_use]
    pub fn post_attachment(&self) -> Option<&P> {
        self.post_attachment.as_ref()
    }

    pub fn set_post_attachment(&mut self, post_attachment: Option<P>) {
        self.post_attachment = post_attachment;
    }

    /// Returns the averaged resample value, or `None` if never resampled.
    #[must_use]
    pub fn resample_value(&self) -> Option<f64> {
        self.resample_value
    }

    pub fn set_resample_value(&mut self, resample_value: f64) {
        self.resample_value = Some(resample_value);
    }
}
