use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use hushdns_domain::{Answer, AnswerSet, ResolveError};
use tracing::debug;

/// Decodes RFC 1035 response bodies into answer sets.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a wire-format response body.
    ///
    /// Fails with `InvalidResponse` when the message does not decode, and
    /// with `NoAnswers` when it decodes but carries no usable answers.
    pub fn parse(body: &[u8]) -> Result<AnswerSet, ResolveError> {
        let message = Message::from_vec(body).map_err(|e| {
            ResolveError::InvalidResponse(format!("failed to decode response: {}", e))
        })?;

        let mut answers = Vec::with_capacity(message.answers.len());
        for record in &message.answers {
            let Some(data) = render_rdata(&record.data) else {
                continue;
            };
            answers.push(Answer {
                data,
                ttl: record.ttl,
            });
        }

        debug!(
            rcode = ?message.metadata.response_code,
            answers = answers.len(),
            "DoH response decoded"
        );

        if answers.is_empty() {
            return Err(ResolveError::NoAnswers);
        }

        Ok(AnswerSet { answers })
    }
}

/// Render one answer's data in presentation form.
///
/// TXT values arrive in quoted presentation form; leading and trailing
/// quote characters are stripped. Record types with no textual rendering
/// are skipped.
fn render_rdata(data: &RData) -> Option<String> {
    match data {
        RData::A(a) => Some(a.0.to_string()),
        RData::AAAA(aaaa) => Some(aaaa.0.to_string()),
        RData::CNAME(canonical) => Some(canonical.to_utf8()),
        RData::TXT(txt) => {
            let joined: String = txt
                .txt_data
                .iter()
                .map(|chunk| String::from_utf8_lossy(chunk))
                .collect();
            Some(joined.trim_matches(['"', '\'']).to_string())
        }
        other => {
            debug!(rdata = ?other, "skipping answer with unhandled rdata");
            None
        }
    }
}
