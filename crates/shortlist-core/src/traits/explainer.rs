use crate::errors::ShortlistResult;
use crate::models::{FitContext, FitExplanation};

/// Natural-language fit justification via a generative-language service.
/// Display only — failures degrade to a default explanation, never abort
/// the caller.
pub trait IFitExplainer: Send + Sync {
    fn explain_fit(&self, context: &FitContext) -> ShortlistResult<FitExplanation>;
}
