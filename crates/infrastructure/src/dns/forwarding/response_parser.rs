use dnsperf_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::Ipv4Addr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsReply {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    /// First A record of the answer section, in wire order.
    pub first_a: Option<Ipv4Addr>,
    pub answer_count: usize,
}

impl DnsReply {
    /// Server declined or could not answer. Counted as a failed lookup.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp | ResponseCode::FormErr
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsReply, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let first_a = message.answers().iter().find_map(|record| match record.data() {
            RData::A(a) => Some(a.0),
            _ => None,
        });

        // Header id, big-endian in the first two bytes; present once parsing succeeded.
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);

        let reply = DnsReply {
            id,
            rcode: message.response_code(),
            truncated: message.truncated(),
            first_a,
            answer_count: message.answers().len(),
        };

        debug!(
            rcode = ?reply.rcode,
            answers = reply.answer_count,
            first_a = ?reply.first_a,
            truncated = reply.truncated,
            "DNS response parsed"
        );

        Ok(reply)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
