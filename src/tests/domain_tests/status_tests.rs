use crate::domain::status::*;

#[test]
fn classifies_status_text() {
    assert_eq!(classify(Some("VERIFICADA")), StatusBadge::Verified);
    assert_eq!(classify(Some("verificado")), StatusBadge::Verified);
    assert_eq!(classify(Some("Sin Registrar")), StatusBadge::Unregistered);
    assert_eq!(classify(Some("FAM SIN REGISTRAR")), StatusBadge::Unregistered);
    assert_eq!(classify(Some("")), StatusBadge::NoData);
    assert_eq!(classify(Some("   ")), StatusBadge::NoData);
    assert_eq!(classify(None), StatusBadge::NoData);
    assert_eq!(
        classify(Some(" Pendiente ")),
        StatusBadge::Other("Pendiente".to_string())
    );
}

#[test]
fn unregistered_wins_over_verification_words() {
    assert_eq!(
        classify(Some("SIN REGISTRAR - VERIFICACION PENDIENTE")),
        StatusBadge::Unregistered
    );
}

#[test]
fn is_verified_gates_on_classification() {
    assert!(is_verified(Some("Verificada")));
    assert!(!is_verified(Some("Observada")));
    assert!(!is_verified(None));
}

#[test]
fn badge_presentation() {
    assert_eq!(StatusBadge::Verified.label(), "VERIFICADA");
    assert_eq!(StatusBadge::Verified.tone(), BadgeTone::Green);
    assert_eq!(StatusBadge::Unregistered.label(), "SIN REGISTRAR");
    assert_eq!(StatusBadge::Unregistered.tone(), BadgeTone::Red);
    assert_eq!(StatusBadge::NoData.label(), "SIN DATO");
    assert_eq!(StatusBadge::NoData.tone(), BadgeTone::Yellow);

    let other = StatusBadge::Other("Observada".into());
    assert_eq!(other.label(), "Observada");
    assert_eq!(other.tone().css_class(), "badge badge-yellow");
}
