//! Integration tests for TOML settings loading.

use kundali_base::SubPeriodMethod;
use kundali_config::{ConfigError, KundaliSettings};

#[test]
fn partial_file_overrides_only_named_keys() {
    let text = r#"
        [strength]
        combustion_orb_deg = 8.5

        [yoga]
        isolation_ignores_nodes = true

        [dasha]
        sub_period_method = "from_parent"
    "#;
    let s = KundaliSettings::from_toml_str(text).unwrap();
    assert!((s.strength.combustion_orb_deg - 8.5).abs() < 1e-12);
    assert!((s.strength.dignity_orb_deg - 1.0).abs() < 1e-12);
    assert!(s.yoga.isolation_ignores_nodes);
    assert!((s.yoga.conjunction_orb_deg - 8.0).abs() < 1e-12);
    assert_eq!(s.dasha.sub_period_method, SubPeriodMethod::FromParent);
    assert_eq!(s.divisional.harmonics, vec![7, 9, 10]);
}

#[test]
fn custom_ayanamsha_and_harmonics() {
    let text = r#"
        [ayanamsha]
        epoch_year = 291.0

        [divisional]
        harmonics = [1, 9, 60]
    "#;
    let s = KundaliSettings::from_toml_str(text).unwrap();
    assert!((s.ayanamsha.epoch_year - 291.0).abs() < 1e-12);
    assert!((s.ayanamsha.arcsec_per_year - 50.290966).abs() < 1e-12);
    let h: Vec<u16> = s.harmonics().iter().map(|n| n.get()).collect();
    assert_eq!(h, vec![1, 9, 60]);
}

#[test]
fn unknown_method_is_parse_error() {
    let err = KundaliSettings::from_toml_str("[dasha]\nsub_period_method = \"rotating\"\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
}

#[test]
fn duplicate_harmonic_is_invalid() {
    let err = KundaliSettings::from_toml_str("[divisional]\nharmonics = [9, 9]\n").unwrap_err();
    match err {
        ConfigError::Invalid { field, reason } => {
            assert_eq!(field, "divisional.harmonics");
            assert!(reason.contains("twice"), "reason: {reason}");
        }
        other => panic!("expected Invalid, got {other}"),
    }
}

#[test]
fn out_of_range_orb_is_invalid() {
    let err =
        KundaliSettings::from_toml_str("[strength]\ndignity_orb_deg = 20.0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "strength.dignity_orb_deg",
            ..
        }
    ));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("kundali_settings_{}.toml", std::process::id()));
    std::fs::write(&path, "[yoga]\nconjunction_orb_deg = 6.0\n").unwrap();
    let s = KundaliSettings::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!((s.yoga.conjunction_orb_deg - 6.0).abs() < 1e-12);
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("kundali_settings_does_not_exist.toml");
    let err = KundaliSettings::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io, got {other}"),
    }
}
