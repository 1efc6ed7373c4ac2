//! Static mapping from keyboard request ids to labels and message effects.

/// Label + optional message effect for one request kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindInfo {
    pub label: &'static str,
    pub effect_id: Option<&'static str>,
}

/// Effect attached to the `/start` welcome message (🔥 fire).
pub const START_EFFECT_ID: &str = "5104841245755180586";

/// Effect attached to forwarded-message replies (🎉 confetti).
pub const FORWARD_EFFECT_ID: &str = "5046509860389126442";

const EFFECT_THUMBS_UP: &str = "5107584321108051014";
const EFFECT_POOP: &str = "5046589136895476101";
const EFFECT_FIRE: &str = START_EFFECT_ID;
const EFFECT_THUMBS_DOWN: &str = "5104858069142078462";
const EFFECT_CONFETTI: &str = FORWARD_EFFECT_ID;

/// Look up the label and effect for a keyboard request id.
///
/// Total over all integers: ids outside 1..=7 yield "Unknown" with no effect.
pub fn lookup(request_id: i32) -> KindInfo {
    let (label, effect_id) = match request_id {
        1 => ("User", Some(EFFECT_THUMBS_UP)),
        2 => ("Private Channel", Some(EFFECT_POOP)),
        3 => ("Public Channel", Some(EFFECT_FIRE)),
        4 => ("Private Group", Some(EFFECT_THUMBS_DOWN)),
        5 => ("Public Group", Some(EFFECT_CONFETTI)),
        6 => ("Bot", Some(EFFECT_CONFETTI)),
        7 => ("Premium User", Some(EFFECT_CONFETTI)),
        _ => ("Unknown", None),
    };
    KindInfo { label, effect_id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_have_exact_labels() {
        let expected = [
            (1, "User"),
            (2, "Private Channel"),
            (3, "Public Channel"),
            (4, "Private Group"),
            (5, "Public Group"),
            (6, "Bot"),
            (7, "Premium User"),
        ];
        for (id, label) in expected {
            let info = lookup(id);
            assert_eq!(info.label, label, "request id {id}");
            assert!(info.effect_id.is_some(), "request id {id}");
        }
    }

    #[test]
    fn unknown_kinds_are_total() {
        for id in [0, -1, 8, 42, i32::MIN, i32::MAX] {
            let info = lookup(id);
            assert_eq!(info.label, "Unknown");
            assert_eq!(info.effect_id, None);
        }
    }
}
