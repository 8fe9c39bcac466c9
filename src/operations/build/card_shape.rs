use crate::store::{EntityKind, Shape};

/// Maps an element card name to the collection and shape it renders as.
///
/// Names are matched exactly. Returns `None` for cards the viewer has no
/// handler for, including lower-case or padded spellings.
#[must_use]
pub fn classify_card(card_name: &str) -> Option<(EntityKind, Shape)> {
    let shape = match card_name {
        "CBEAM" | "CBAR" | "CROD" => Shape::Line,
        "CTRIA3" => Shape::Triangle,
        "CQUAD4" => Shape::Quad,
        "RBE2" | "RBE3" => return Some((EntityKind::Rbe, Shape::Spider)),
        _ => return None,
    };
    Some((EntityKind::Element, shape))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cards() {
        assert_eq!(classify_card("CBEAM"), Some((EntityKind::Element, Shape::Line)));
        assert_eq!(classify_card("CTRIA3"), Some((EntityKind::Element, Shape::Triangle)));
        assert_eq!(classify_card("CQUAD4"), Some((EntityKind::Element, Shape::Quad)));
        assert_eq!(classify_card("RBE2"), Some((EntityKind::Rbe, Shape::Spider)));
    }

    #[test]
    fn card_names_match_exactly() {
        assert_eq!(classify_card("ctria3"), None);
        assert_eq!(classify_card(" CTRIA3 "), None);
        assert_eq!(classify_card("Rbe2"), None);
    }

    #[test]
    fn unknown_cards() {
        assert_eq!(classify_card("CHEXA"), None);
        assert_eq!(classify_card("CONM2"), None);
        assert_eq!(classify_card(""), None);
    }
}
