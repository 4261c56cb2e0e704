//! Rollen-Klassifikation der Kontrollpunkte (Anker vs. Handle).

/// Rolle eines Kontrollpunkts beim Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// Verbindungspunkt zweier Segmente (`index % 3 == 1`)
    Anchor,
    /// Eingehender Handle des folgenden Ankers (`index % 3 == 0`)
    HandleBefore,
    /// Ausgehender Handle des vorherigen Ankers (`index % 3 == 2`)
    HandleAfter,
    /// Sentinel, letzter Punkt oder Index außerhalb der Folge
    Unclassified,
}

impl PointRole {
    /// Gibt `true` zurück für beide Handle-Rollen.
    pub fn is_handle(self) -> bool {
        matches!(self, Self::HandleBefore | Self::HandleAfter)
    }
}

/// Klassifiziert `index` in einer Folge der Länge `len` (inkl. Sentinel).
///
/// Reine Funktion von `index % 3`; der erste (Sentinel) und der letzte
/// Punkt erhalten nie eine Rolle.
pub fn classify(index: usize, len: usize) -> PointRole {
    if index == 0 || index + 1 >= len {
        return PointRole::Unclassified;
    }
    match index % 3 {
        1 => PointRole::Anchor,
        2 => PointRole::HandleAfter,
        _ => PointRole::HandleBefore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_classes_inside_sequence() {
        let len = 10;
        assert_eq!(classify(1, len), PointRole::Anchor);
        assert_eq!(classify(2, len), PointRole::HandleAfter);
        assert_eq!(classify(3, len), PointRole::HandleBefore);
        assert_eq!(classify(4, len), PointRole::Anchor);
        assert_eq!(classify(5, len), PointRole::HandleAfter);
        assert_eq!(classify(8, len), PointRole::HandleAfter);
    }

    #[test]
    fn first_last_and_out_of_range_are_unclassified() {
        let len = 7;
        assert_eq!(classify(0, len), PointRole::Unclassified);
        assert_eq!(classify(6, len), PointRole::Unclassified);
        assert_eq!(classify(7, len), PointRole::Unclassified);
        assert_eq!(classify(usize::MAX, len), PointRole::Unclassified);
    }

    #[test]
    fn sentinel_only_sequence_has_no_roles() {
        assert_eq!(classify(0, 1), PointRole::Unclassified);
        assert_eq!(classify(1, 1), PointRole::Unclassified);
    }

    #[test]
    fn handle_helper() {
        assert!(PointRole::HandleBefore.is_handle());
        assert!(PointRole::HandleAfter.is_handle());
        assert!(!PointRole::Anchor.is_handle());
        assert!(!PointRole::Unclassified.is_handle());
    }
}
