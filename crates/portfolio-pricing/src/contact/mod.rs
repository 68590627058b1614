//! Contact form submission: validation and delivery through a hosted form
//! relay whose JSON contract is fixed by the relay provider.

pub mod domain;
pub mod relay;
pub mod router;
pub mod service;


pub use domain::{
    is_valid_email, ContactError, ContactReceipt, ContactSubmission, RETRY_MESSAGE, SENT_MESSAGE,
};
pub use relay::{ContactRelay, FormRelayClient, RelayError};
pub use router::contact_router;
pub use service::ContactService;
