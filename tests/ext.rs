use base32_codec::{Base32Decode, Base32Encode, DecodeError};

#[test]
fn encodes_slices_vecs_and_arrays() {
    assert_eq!(b"foob".encode_base32(), "MZXW6YQ=");
    assert_eq!(vec![0x66u8, 0x6f].encode_base32(), "MZXQ====");
    assert_eq!([0u8; 0].encode_base32(), "");
}

#[test]
fn decodes_str_and_string() -> anyhow::Result<()> {
    assert_eq!("MZXW6YTB".decode_base32()?, b"fooba");
    assert_eq!(String::from("MZXW6===\n").decode_base32()?, b"foo");
    Ok(())
}

#[test]
fn decode_error_converts_into_anyhow() {
    let result: anyhow::Result<Vec<u8>> = "MZXW6YT=B".decode_base32().map_err(Into::into);
    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<DecodeError>(),
        Some(&DecodeError::InvalidCharacter { ch: '=', index: 7 })
    );
}

#[test]
fn decodes_a_totp_secret() -> anyhow::Result<()> {
    let secret = "JBSWY3DPEHPK3PXP".decode_base32()?;
    assert_eq!(secret, b"Hello!\xde\xad\xbe\xef");
    assert_eq!(secret.encode_base32(), "JBSWY3DPEHPK3PXP");
    Ok(())
}
