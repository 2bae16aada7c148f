use coldkey::params::MAX_KEY;
use coldkey::{
    derive_public_key, from_coinflip_sequence, from_dice_sequence, from_hex_sequence, hash160,
    is_valid_key, wif, KeyError, KeyPair, PrivateKey, SecureMnemonic,
};

fn dice() -> String {
    let mut rolls = "162534".repeat(16);
    rolls.push_str("416");
    rolls
}

#[test]
fn dice_to_address() {
    let key = from_dice_sequence(&dice()).unwrap();
    assert!(is_valid_key(&key.to_biguint()));

    let pair = KeyPair::new(key.clone(), true);
    let public_key = pair.public_key().unwrap();
    assert_eq!(public_key.as_bytes().len(), 33);
    assert_eq!(pair.pubkey_hash().unwrap(), hash160(public_key.as_bytes()));
    assert!(pair.address().unwrap().starts_with('1'));

    let restored = KeyPair::from_wif(&pair.to_wif()).unwrap();
    assert_eq!(restored, pair);
}

#[test]
fn same_scalar_from_every_source() {
    let hex = format!("{:0>64}", MAX_KEY.to_str_radix(16));
    let bits = format!("{:0>256}", MAX_KEY.to_str_radix(2));

    let from_hex = from_hex_sequence(&hex).unwrap();
    let from_bits = from_coinflip_sequence(&bits).unwrap();
    assert_eq!(from_hex, from_bits);
    assert_eq!(from_hex.to_biguint(), *MAX_KEY);
}

#[test]
fn wif_round_trip_keeps_compression() {
    let key = from_hex_sequence("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d")
        .unwrap();

    let uncompressed = wif::encode(&key, false);
    assert_eq!(uncompressed, "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ");
    assert_eq!(wif::decode(&uncompressed).unwrap(), (key.clone(), false));

    let compressed = wif::encode(&key, true);
    assert_eq!(wif::decode(&compressed).unwrap(), (key, true));
}

#[test]
fn compressed_and_uncompressed_hash_differently() {
    let key = PrivateKey::from_bytes(&[1]).unwrap();
    let compressed = derive_public_key(&key, true).unwrap();
    let uncompressed = derive_public_key(&key, false).unwrap();

    assert_eq!(&compressed.as_bytes()[1..], &uncompressed.as_bytes()[1..33]);
    assert_ne!(compressed.hash160(), uncompressed.hash160());
}

#[test]
fn rejected_inputs() {
    assert_eq!(from_dice_sequence(&"1".repeat(99)), Err(KeyError::OutOfRange));
    assert!(matches!(
        from_dice_sequence(&"1".repeat(98)),
        Err(KeyError::Length { expected: 99, actual: 98 })
    ));
    assert!(matches!(
        KeyPair::from_wif("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTK"),
        Err(KeyError::Checksum)
    ));
}

#[test]
fn mnemonic_from_dice_key() {
    let key = from_dice_sequence(&dice()).unwrap();
    let mnemonic = SecureMnemonic::from_private_key(&key).unwrap();
    assert_eq!(mnemonic.word_count(), 24);
    assert_eq!(&mnemonic.to_entropy()[..], &key.to_padded()[..]);
}

#[test]
fn keys_shared_across_threads() {
    let key = from_dice_sequence(&dice()).unwrap();
    let expected = derive_public_key(&key, true).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let key = key.clone();
            std::thread::spawn(move || derive_public_key(&key, true).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
