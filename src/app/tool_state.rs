use crate::error::BrandError;

/// Result and busy flag owned by one tool.
///
/// `begin` marks a request in flight and hands back an [`InFlight`] handle;
/// a second `begin` is refused until that handle settles the request or is
/// dropped. A failed call records its message but keeps the last good result,
/// so the user can retry against unchanged state.
#[derive(Debug)]
pub struct ToolState<T> {
    busy: bool,
    result: Option<T>,
    last_error: Option<String>,
}

impl<T> Default for ToolState<T> {
    fn default() -> Self {
        Self {
            busy: false,
            result: None,
            last_error: None,
        }
    }
}

impl<T> ToolState<T> {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn begin(&mut self) -> Result<InFlight<'_, T>, BrandError> {
        if self.busy {
            return Err(BrandError::precondition(
                "a request for this tool is already in flight",
            ));
        }
        self.busy = true;
        Ok(InFlight { state: Some(self) })
    }

    fn settle(&mut self, outcome: Result<T, BrandError>) -> Result<&T, BrandError> {
        self.busy = false;
        match outcome {
            Ok(value) => {
                self.last_error = None;
                Ok(&*self.result.insert(value))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tool request failed");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Back to the freshly-mounted state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One outstanding request against a [`ToolState`].
///
/// Dropping it unsettled (a cancelled or timed-out future) clears the busy
/// flag and leaves result and error untouched.
#[must_use = "an in-flight request must be finished"]
#[derive(Debug)]
pub struct InFlight<'a, T> {
    state: Option<&'a mut ToolState<T>>,
}

impl<'a, T> InFlight<'a, T> {
    pub fn is_busy(&self) -> bool {
        self.state.as_ref().is_some_and(|state| state.busy)
    }

    pub fn finish(mut self, outcome: Result<T, BrandError>) -> Result<&'a T, BrandError> {
        match self.state.take() {
            Some(state) => state.settle(outcome),
            None => Err(BrandError::precondition("request was already settled")),
        }
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            tracing::debug!("Tool request abandoned before it settled");
            state.busy = false;
        }
    }
}
