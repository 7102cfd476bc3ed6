use super::*;

#[test]
fn validate_profile_input_trims_both_names() {
    assert_eq!(
        validate_profile_input("  Carla ", " Pérez "),
        Ok(("Carla".to_owned(), "Pérez".to_owned()))
    );
}

#[test]
fn validate_profile_input_requires_both_names() {
    assert_eq!(
        validate_profile_input("", "Pérez"),
        Err("Enter both first and last name.")
    );
    assert_eq!(
        validate_profile_input("Carla", "   "),
        Err("Enter both first and last name.")
    );
}

#[test]
fn display_name_joins_first_and_last() {
    assert_eq!(display_name("Carla", "Pérez"), "Carla Pérez");
}
