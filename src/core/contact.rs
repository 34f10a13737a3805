use crate::domain::model::{ContactForm, FormField};
use crate::domain::ports::PortfolioApi;
use crate::utils::error::SubmissionError;
use crate::utils::validation::validate_non_empty_string;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error(SubmissionError),
}

impl SubmissionState {
    /// Status line shown under the form, `None` while idle or in flight.
    pub fn message(&self) -> Option<String> {
        match self {
            SubmissionState::Success => Some(SUCCESS_MESSAGE.to_string()),
            SubmissionState::Error(e) => Some(e.to_string()),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }
}

/// Observable status. `cycle` counts submissions so a reset only clears its own outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub cycle: u64,
    pub state: SubmissionState,
}

/// One contact form instance: its inputs, its submission status and the pending auto-clear.
pub struct ContactFormClient<A: PortfolioApi> {
    api: Arc<A>,
    fields: ContactForm,
    status: Arc<watch::Sender<StatusSnapshot>>,
    cycle: u64,
    request_timeout: Duration,
    reset_delay: Duration,
    pending_reset: Option<JoinHandle<()>>,
}

impl<A: PortfolioApi> ContactFormClient<A> {
    pub fn new(api: Arc<A>, request_timeout: Duration, reset_delay: Duration) -> Self {
        let (status, _) = watch::channel(StatusSnapshot {
            cycle: 0,
            state: SubmissionState::Idle,
        });

        Self {
            api,
            fields: ContactForm::default(),
            status: Arc::new(status),
            cycle: 0,
            request_timeout,
            reset_delay,
            pending_reset: None,
        }
    }

    pub fn fields(&self) -> &ContactForm {
        &self.fields
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Subject => self.fields.subject = value,
            FormField::Message => self.fields.message = value,
        }
    }

    pub fn fill(&mut self, form: ContactForm) {
        self.fields = form;
    }

    pub fn state(&self) -> SubmissionState {
        self.status.borrow().state.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StatusSnapshot> {
        self.status.subscribe()
    }

    /// Inputs and the submit control are disabled while a request is in flight.
    pub fn is_disabled(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Runs one submission cycle and returns the outcome.
    ///
    /// Success clears the inputs; failure keeps them for a retry. Either way the
    /// outcome is cleared back to `Idle` after the reset delay unless another
    /// submit comes first.
    pub async fn submit(&mut self) -> SubmissionState {
        self.cancel_pending_reset();
        self.cycle += 1;
        let cycle = self.cycle;
        self.publish(SubmissionState::Submitting);
        let mut in_flight = InFlight {
            status: Arc::clone(&self.status),
            cycle,
            armed: true,
        };

        let outcome = match self.validate_fields() {
            Ok(()) => self.send().await,
            Err(e) => Err(e),
        };

        let state = match outcome {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.fields.clear();
                SubmissionState::Success
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact message not sent");
                SubmissionState::Error(e)
            }
        };

        in_flight.armed = false;
        self.publish(state.clone());
        self.schedule_reset(cycle);
        state
    }

    fn validate_fields(&self) -> Result<(), SubmissionError> {
        let form = &self.fields;
        [
            ("name", &form.name),
            ("email", &form.email),
            ("subject", &form.subject),
            ("message", &form.message),
        ]
        .into_iter()
        .try_for_each(|(field, value)| validate_non_empty_string(field, value))
        .map_err(|e| {
            tracing::debug!(error = %e, "Contact form incomplete");
            SubmissionError::Validation
        })
    }

    async fn send(&self) -> Result<(), SubmissionError> {
        match tokio::time::timeout(self.request_timeout, self.api.submit_contact(&self.fields))
            .await
        {
            Ok(Ok(receipt)) => {
                if let Some(receipt) = receipt {
                    tracing::debug!(id = %receipt.id, "Backend stored contact message");
                }
                Ok(())
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.request_timeout.as_secs(),
                    "Contact submission timed out"
                );
                Err(SubmissionError::Transport)
            }
        }
    }

    fn publish(&self, state: SubmissionState) {
        let cycle = self.cycle;
        self.status.send_replace(StatusSnapshot { cycle, state });
    }

    fn schedule_reset(&mut self, cycle: u64) {
        let status = Arc::clone(&self.status);
        let delay = self.reset_delay;

        self.pending_reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            status.send_if_modified(|snapshot| {
                if snapshot.cycle != cycle || snapshot.state == SubmissionState::Submitting {
                    return false;
                }
                snapshot.state = SubmissionState::Idle;
                true
            });
        }));
    }

    fn cancel_pending_reset(&mut self) {
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
    }
}

/// Returns the form to `Idle` when a `submit` future is dropped mid-request.
struct InFlight {
    status: Arc<watch::Sender<StatusSnapshot>>,
    cycle: u64,
    armed: bool,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let cycle = self.cycle;
        self.status.send_if_modified(|snapshot| {
            if snapshot.cycle != cycle || snapshot.state != SubmissionState::Submitting {
                return false;
            }
            tracing::debug!("Contact submission abandoned");
            snapshot.state = SubmissionState::Idle;
            true
        });
    }
}

impl<A: PortfolioApi> Drop for ContactFormClient<A> {
    fn drop(&mut self) {
        self.cancel_pending_reset();
    }
}
