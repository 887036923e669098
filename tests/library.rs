use proptest::prelude::*;
use std::error::Error;
use textcloak::pipeline::{
    caesar_forward, caesar_inverse, reverse_forward, vigenere_forward, vigenere_inverse, MODULUS,
};
use textcloak::{
    decrypt, encrypt, parse_key_list, CloakError, TransformationList, TransformationStep,
};

fn step_strategy() -> impl Strategy<Value = TransformationStep> {
    prop_oneof![
        any::<i64>().prop_map(TransformationStep::caesar),
        Just(TransformationStep::reverse()),
        "\\PC{1,8}".prop_map(|key| TransformationStep::Vigenere { key }),
    ]
}

fn list_strategy() -> impl Strategy<Value = TransformationList> {
    prop::collection::vec(step_strategy(), 0..8).prop_map(TransformationList::from)
}

proptest! {
    #[test]
    fn roundtrip_any_list(text in any::<String>(), steps in list_strategy()) {
        let cipher = encrypt(&text, &steps).unwrap();
        prop_assert_eq!(decrypt(&cipher, &steps).unwrap(), text);
    }

    #[test]
    fn encrypt_preserves_codepoint_count(text in any::<String>(), steps in list_strategy()) {
        let cipher = encrypt(&text, &steps).unwrap();
        prop_assert_eq!(cipher.chars().count(), text.chars().count());
    }

    #[test]
    fn reverse_is_an_involution(text in any::<String>()) {
        prop_assert_eq!(reverse_forward(&reverse_forward(&text)), text);
    }

    #[test]
    fn caesar_inverse_undoes_forward(text in any::<String>(), shift in any::<i64>()) {
        prop_assert_eq!(caesar_inverse(&caesar_forward(&text, shift), shift), text);
    }

    #[test]
    fn caesar_single_codepoint_shift(shift in any::<i64>()) {
        let out = caesar_forward("A", shift);
        let expected = (('A' as i64) + shift.rem_euclid(MODULUS as i64)) % MODULUS as i64;
        prop_assert_eq!(out.chars().next().unwrap() as i64, expected);
    }

    #[test]
    fn vigenere_shift_follows_key_position(
        key in "[a-z]{1,6}",
        len in 0usize..40,
    ) {
        let text = "\u{0}".repeat(len);
        let out = vigenere_forward(&text, &key).unwrap();
        let key_chars: Vec<char> = key.chars().collect();
        for (p, c) in out.chars().enumerate() {
            prop_assert_eq!(c, key_chars[p % key_chars.len()]);
        }
        prop_assert_eq!(vigenere_inverse(&out, &key).unwrap(), text);
    }
}

#[test]
fn descriptor_example_from_key_file() -> Result<(), Box<dyn Error>> {
    let steps = parse_key_list(r#"[{"type": "caesar", "key": 3}, {"type": "reverse"}]"#)?;
    assert_eq!(encrypt("hi", &steps)?, "lk");
    assert_eq!(decrypt("lk", &steps)?, "hi");
    Ok(())
}

#[test]
fn shifting_by_modulus_is_identity() {
    assert_eq!(caesar_forward("A", MODULUS as i64), "A");
    assert_eq!(caesar_inverse(&caesar_forward("A", 5), 5), "A");
}

#[test]
fn empty_vigenere_key_rejected_by_every_entry_point() {
    let steps: TransformationList = vec![TransformationStep::Vigenere { key: String::new() }].into();
    assert!(matches!(encrypt("x", &steps), Err(CloakError::Configuration(_))));
    assert!(matches!(decrypt("x", &steps), Err(CloakError::Configuration(_))));
    assert!(matches!(
        parse_key_list(r#"[{"type":"vigenere","key":""}]"#),
        Err(CloakError::Configuration(_))
    ));
}
