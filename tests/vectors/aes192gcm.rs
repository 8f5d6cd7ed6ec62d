//! AES-192-GCM test vectors: the McGrew & Viega GCM test cases (including 64-bit and
//! 480-bit IVs) plus 128-bit IV and truncated tag cases.

#[macro_use]
#[path = "gcm_tests.rs"]
mod gcm_tests;

use gcm_tests::TestVector;
use hex_literal::hex;

const TEST_VECTORS: &[TestVector] = &[
    TestVector {
        key: &hex!("000000000000000000000000000000000000000000000000"),
        nonce: &hex!("000000000000000000000000"),
        aad: &[],
        plaintext: &[],
        ciphertext: &[],
        tag: &hex!("cd33b28ac773f74ba00ed1f312572435"),
    },
    TestVector {
        key: &hex!("000000000000000000000000000000000000000000000000"),
        nonce: &hex!("000000000000000000000000"),
        aad: &[],
        plaintext: &hex!("00000000000000000000000000000000"),
        ciphertext: &hex!("98e7247c07f0fe411c267e4384b0f600"),
        tag: &hex!("2ff58d80033927ab8ef4d4587514f0fb"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308feffe9928665731c"),
        nonce: &hex!("cafebabefacedbaddecaf888"),
        aad: &[],
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b391aafd255"
        ),
        ciphertext: &hex!(
            "3980ca0b3c00e841eb06fac4872a2757859e1ceaa6efd984628593b40ca1e19c"
            "7d773d00c144c525ac619d18c84a3f4718e2448b2fe324d9ccda2710acade256"
        ),
        tag: &hex!("9924a7c8587336bfb118024db8674a14"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308feffe9928665731c"),
        nonce: &hex!("cafebabefacedbaddecaf888"),
        aad: &hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2"),
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b39"
        ),
        ciphertext: &hex!(
            "3980ca0b3c00e841eb06fac4872a2757859e1ceaa6efd984628593b40ca1e19c"
            "7d773d00c144c525ac619d18c84a3f4718e2448b2fe324d9ccda2710"
        ),
        tag: &hex!("2519498e80f1478f37ba55bd6d27618c"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308feffe9928665731c"),
        nonce: &hex!("cafebabefacedbad"),
        aad: &hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2"),
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b39"
        ),
        ciphertext: &hex!(
            "0f10f599ae14a154ed24b36e25324db8c566632ef2bbb34f8347280fc4507057"
            "fddc29df9a471f75c66541d4d4dad1c9e93a19a58e8b473fa0f062f7"
        ),
        tag: &hex!("65dcc57fcf623a24094fcca40d3533f8"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308feffe9928665731c"),
        nonce: &hex!(
            "9313225df88406e555909c5aff5269aa6a7a9538534f7da1e4c303d2a318a728"
            "c3c0c95156809539fcf0e2429a6b525416aedbf5a0de6a57a637b39b"
        ),
        aad: &hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2"),
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b39"
        ),
        ciphertext: &hex!(
            "d27e88681ce3243c4830165a8fdcf9ff1de9a1d8e6b447ef6ef7b79828666e45"
            "81e79012af34ddd9e2f037589b292db3e67c036745fa22e7e9b7373b"
        ),
        tag: &hex!("dcf566ff291c25bbb8568fc3d376a6d9"),
    },
    TestVector {
        key: &hex!("06667b16a22cd59943488653e12b238177148484fab21140"),
        nonce: &hex!("fb422ca9a228d21d7394bb4712607f7b"),
        aad: &[],
        plaintext: &[],
        ciphertext: &[],
        tag: &hex!("830fa505b509bd1bdfb887fffdf00e6b"),
    },
    TestVector {
        key: &hex!("f531358fb4845adc1af725c6eaed1d488ad6e276602bce82"),
        nonce: &hex!("7abb0b784238bb36b979909bd6a4b43b"),
        aad: &[],
        plaintext: &hex!("38ebb107a4e1c50d256f2d085fb62c69"),
        ciphertext: &hex!("4a366c3b11da61b357ad1973940f4399"),
        tag: &hex!("794f41a300ced655865e7cc2d619e9a1"),
    },
    TestVector {
        key: &hex!("f6e789ca8b6252a91385e10b722bd69b5105faf817389ac1"),
        nonce: &hex!("56b1d868205252561a9beebabb3c05e6"),
        aad: &hex!("159a72c372231f2df76fae8d121f4002"),
        plaintext: &[],
        ciphertext: &[],
        tag: &hex!("0f8eedbdae09193fe6083b20"),
    },
    TestVector {
        key: &hex!("199ad39b691f49c4c5a82cd70025cadb68466c24853aaecb"),
        nonce: &hex!("b8ffbd970a99d0072d1c380c8b5d4b52"),
        aad: &hex!("7fb838523bdfaf77b20f1737400992ac77c31720"),
        plaintext: &hex!(
            "265035e3c1fc3d5d877a21e00c50e0247be4f6c8bfdafaa74138765a16f9f255"
            "aa187223cb49c670fab6d70a41b62c04a329a8"
        ),
        ciphertext: &hex!(
            "72948e7b4f10b11c3fe7961f954ce38c15f104e7fbfd3e873817daf345e762a6"
            "e9a41a01284e80799a3f47dd844a9725f665ef"
        ),
        tag: &hex!("1a16fcc64ae918ea"),
    },
    TestVector {
        key: &hex!("8695366509b583e0f8f72e8fac3594013024b101065f0fe5"),
        nonce: &hex!("592e00d13b93b402316e1707d861277f"),
        aad: &hex!(
            "6185ccdd4153ef658b958bb40e1c6bac86cdf8d03d5e511f989cb8495e2c1027"
            "2d3b93d3674a27bc641c49b442b40568949e75f846d845e0005275a40ab5ab12"
            "e3bf422e7b5bcf2e617d0bcb03b5918a117c6ee5529b7310e423"
        ),
        plaintext: &hex!("dad4c05ab9352f5a2f2aa405c3"),
        ciphertext: &hex!("1d01f0470f81c7a5251a48c547"),
        tag: &hex!("7d7ae0093d4b136e9b5821da3305be"),
    },
    TestVector {
        key: &hex!("86b0e962bfe137a785ba1ccd5d65b63ebc2eed5e68126f9d"),
        nonce: &hex!("5d3d043efa9991491eb67ea2856578a7"),
        aad: &hex!(
            "faa01192399d1a00b7be9e5fc0ec33884cc20042f7a208245a077c5e32d8fad5"
            "b272786877373da7b2c5388c43faed37"
        ),
        plaintext: &hex!(
            "bad712d2351a6969e5feb54249f5712a90b825adddff1572dbbc3e382f4b22f5"
            "65b655715d23c37862fb2b9e8c0f9aaa464b7775e2696ec912a0b9f4c1c33d10"
        ),
        ciphertext: &hex!(
            "83114bc47d0cee85c54856c526fe2447dc08fdb5f6fa063c4c4274111fa33443"
            "5fa1089f9cec0ae06674b8ae666f48a6467ebbaae514b34dba700acbfb2a8ff1"
        ),
        tag: &hex!("a4e38560"),
    },
    TestVector {
        key: &hex!("54389ab9f18b099422439824d5e03e302a878efefe4a51d6"),
        nonce: &hex!("fa2e08deb5a5dfd76556aec5958f627e"),
        aad: &hex!("eb3db099158ed6303cc587b7e8"),
        plaintext: &hex!(
            "b39327fc78021ae7bbd4c9facc7a0dd9a5958cc279033498895878fcedef8646"
            "8f44732d86422a2ce4455c6b73360ba825a62bac7a66f3ae500f84549e4ae962"
            "bc459145604122a25a928a1515"
        ),
        ciphertext: &hex!(
            "3257c952efc7b64ef45ac61b9f1bf3e03d5dbdb2edae87dc52026b051689c5b8"
            "bbc95893e3c60362629256e631928181ebf5ff43096277b30c2aba07a15ad74c"
            "890cede1407cafb4373c232ede"
        ),
        tag: &hex!("41cd809edb10a09fc55a5bcc2385"),
    },
];

gcm_tests!(TEST_VECTORS);
