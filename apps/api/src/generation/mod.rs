// Request Composer + generation flow.
// Options are validated and turned into one instruction string here; the only
// outbound call goes through llm_client::TextGenerator.

pub mod composer;
pub mod gate;
pub mod handlers;
pub mod prompts;
pub mod validation;
