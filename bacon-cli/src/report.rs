//! JSON reports for one-shot commands.

use bacon_core::CipherError;
use serde::Serialize;

use crate::session::Operation;

/// The outcome of a single `encrypt`/`decrypt` invocation.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    operation: Operation,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ReportError>,
}

#[derive(Debug, Serialize)]
struct ReportError {
    message: String,
    #[serde(flatten)]
    detail: CipherError,
}

impl<'a> Report<'a> {
    pub(crate) fn new(
        operation: Operation,
        input: &'a str,
        result: &'a Result<String, CipherError>,
    ) -> Self {
        let (output, error) = match result {
            Ok(output) => (Some(output.as_str()), None),
            Err(e) => (
                None,
                Some(ReportError {
                    message: e.to_string(),
                    detail: *e,
                }),
            ),
        };
        Self {
            operation,
            input,
            output,
            error,
        }
    }
}
