//! Scripted hostel assistant: a fixed set of keyword-to-reply rules.
//! First matching rule wins; the fallback points at what it can answer.

const REPLY_GREETING: &str = "Hello! How can I help you today?";
const REPLY_MAINTENANCE: &str =
    "You can submit a maintenance request through the 'Maintenance Requests' section in the sidebar.";
const REPLY_ROOM: &str =
    "You can view your room details in the 'My Room' section. If you have any specific issues, please submit a maintenance request.";
const REPLY_PAYMENT: &str =
    "For payment-related queries, please check the payment section or contact the administration office.";
const REPLY_DEFAULT: &str =
    "I'm here to help! You can ask me about maintenance requests, room information, or general hostel policies.";

/// Produce the scripted reply for a student message.
pub fn respond(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    if lower.contains("hello") || lower.contains("hi") {
        REPLY_GREETING
    } else if lower.contains("maintenance") {
        REPLY_MAINTENANCE
    } else if lower.contains("room") {
        REPLY_ROOM
    } else if lower.contains("payment") {
        REPLY_PAYMENT
    } else {
        REPLY_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_on_hello_or_hi() {
        assert_eq!(respond("Hello there"), REPLY_GREETING);
        assert_eq!(respond("HI!"), REPLY_GREETING);
    }

    #[test]
    fn keyword_rules_match_case_insensitively() {
        assert_eq!(respond("My ROOM window is stuck"), REPLY_ROOM);
        assert_eq!(respond("who do I ask about Maintenance?"), REPLY_MAINTENANCE);
        assert_eq!(respond("where can I make a payment"), REPLY_PAYMENT);
    }

    #[test]
    fn earlier_rules_win() {
        // "hi" appears inside this sentence, so the greeting rule fires
        // before the maintenance rule; earlier rules win.
        assert_eq!(respond("hi, maintenance question"), REPLY_GREETING);
    }

    #[test]
    fn falls_back_to_help_text() {
        assert_eq!(respond("what time is curfew"), REPLY_DEFAULT);
    }
}
