// Application generation: fit assessment, revised résumé, cover letter.
// All model calls go through the ContentGenerator trait; the parser's
// StructuredResume is the only résumé content sent to it.

pub mod assessment;
pub mod attribution;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod service;
