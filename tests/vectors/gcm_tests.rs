// Shared by the per-key-size vector suites. Vector layout follows
// https://github.com/RustCrypto/AEADs/tree/master/aes-gcm/tests

/// One GCM test vector. `tag` may be truncated (shorter than 16 bytes).
#[derive(Debug)]
pub struct TestVector {
    pub key: &'static [u8],
    pub nonce: &'static [u8],
    pub aad: &'static [u8],
    pub plaintext: &'static [u8],
    pub ciphertext: &'static [u8],
    pub tag: &'static [u8],
}

/// Generate encrypt/decrypt tests over the given vectors.
macro_rules! gcm_tests {
    ($vectors:expr) => {
        fn context_for(vector: &TestVector) -> aesgcm::GcmContext {
            aesgcm::GcmContext::with_key_bits(vector.key, vector.key.len() * 8)
                .expect("invalid test key bytes for this implementation")
        }

        #[test]
        fn vectors_encrypt_matches() {
            for vector in $vectors {
                let ctx = context_for(vector);
                let (ct, tag) = ctx
                    .encrypt_and_tag(vector.plaintext, vector.nonce, vector.aad, vector.tag.len())
                    .expect("encrypt should succeed");

                assert_eq!(vector.ciphertext, ct.as_slice());
                assert_eq!(vector.tag, tag.as_bytes());
            }
        }

        #[test]
        fn vectors_decrypt_ok() {
            for vector in $vectors {
                let ctx = context_for(vector);
                let pt = ctx
                    .decrypt_and_verify(vector.ciphertext, vector.nonce, vector.aad, vector.tag)
                    .expect("valid vector should decrypt");

                assert_eq!(vector.plaintext, pt.as_slice());
            }
        }

        #[test]
        fn vectors_crypt_and_tag_decrypt() {
            for vector in $vectors {
                let ctx = context_for(vector);
                let (pt, tag) = ctx
                    .crypt_and_tag(
                        aesgcm::Direction::Decrypt,
                        vector.ciphertext,
                        vector.nonce,
                        vector.aad,
                        vector.tag.len(),
                    )
                    .expect("decrypt should succeed");

                assert_eq!(vector.plaintext, pt.as_slice());
                assert_eq!(vector.tag, tag.as_bytes());
            }
        }

        #[test]
        fn vectors_reject_bad_tag() {
            for vector in $vectors {
                let ctx = context_for(vector);

                // Flip a bit in the tag (last byte)
                let mut tag = vector.tag.to_vec();
                let last = tag.len() - 1;
                tag[last] ^= 0x01;

                assert!(matches!(
                    ctx.decrypt_and_verify(vector.ciphertext, vector.nonce, vector.aad, &tag),
                    Err(aesgcm::Error::AuthFailed)
                ));
            }
        }

        #[test]
        fn vectors_reject_tampered_ciphertext_or_iv() {
            for vector in $vectors {
                let ctx = context_for(vector);

                // If ciphertext is non-empty, flip first ciphertext byte.
                // Otherwise flip IV[0] (still should fail tag check).
                let mut ct = vector.ciphertext.to_vec();
                let mut iv = vector.nonce.to_vec();
                if !ct.is_empty() {
                    ct[0] ^= 0x01;
                } else {
                    iv[0] ^= 0x01;
                }

                assert!(matches!(
                    ctx.decrypt_and_verify(&ct, &iv, vector.aad, vector.tag),
                    Err(aesgcm::Error::AuthFailed)
                ));
            }
        }

        #[test]
        fn vectors_reject_tampered_aad() {
            for vector in $vectors {
                let ctx = context_for(vector);

                let mut aad = vector.aad.to_vec();
                match aad.last_mut() {
                    Some(b) => *b ^= 0x80,
                    None => aad.push(0),
                }

                assert!(matches!(
                    ctx.decrypt_and_verify(vector.ciphertext, vector.nonce, &aad, vector.tag),
                    Err(aesgcm::Error::AuthFailed)
                ));
            }
        }

        #[test]
        fn vectors_truncated_tags_are_prefixes() {
            for vector in $vectors {
                let ctx = context_for(vector);
                for len in 1..=vector.tag.len() {
                    let (_, tag) = ctx
                        .encrypt_and_tag(vector.plaintext, vector.nonce, vector.aad, len)
                        .expect("encrypt should succeed");
                    assert_eq!(&vector.tag[..len], tag.as_bytes());

                    let pt = ctx
                        .decrypt_and_verify(
                            vector.ciphertext,
                            vector.nonce,
                            vector.aad,
                            &vector.tag[..len],
                        )
                        .expect("truncated tag should verify");
                    assert_eq!(vector.plaintext, pt.as_slice());
                }
            }
        }

        #[test]
        fn vectors_stream_matches() {
            for vector in $vectors {
                let ctx = context_for(vector);
                let mut enc = ctx
                    .start(aesgcm::Direction::Encrypt, vector.nonce, vector.aad)
                    .expect("start should succeed");
                let mut ct = Vec::new();
                for chunk in vector.plaintext.chunks(7) {
                    ct.extend(enc.update(chunk).expect("update should succeed"));
                }
                let tag = enc.finish(vector.tag.len()).expect("finish should succeed");

                assert_eq!(vector.ciphertext, ct.as_slice());
                assert_eq!(vector.tag, tag.as_bytes());
            }
        }
    };
}
