use object_hash::digest::digest;
use object_hash::Error;

#[test]
fn test_hashes_with_none() {
    // Simple strings
    assert_eq!(digest("Hello World", "none").unwrap(), "Hello World");
    assert_eq!(digest("Testing", "none").unwrap(), "Testing");

    // Complex strings
    assert_eq!(
        digest("~9~N45u7k`25YfN", "none").unwrap(),
        "~9~N45u7k`25YfN"
    );

    // Alias
    assert_eq!(digest("Testing", "passthrough").unwrap(), "Testing");
}

#[test]
fn test_hashes_with_md5() {
    assert_eq!(
        digest("Hello World", "md5").unwrap(),
        "B10A8DB164E0754105B7A99BE72E3FE5"
    );
    assert_eq!(
        digest("Testing", "md5").unwrap(),
        "FA6A5A3224D7DA66D9E0BDEC25F62CF0"
    );
    assert_eq!(
        digest("~9~N45u7k`25YfN", "md5").unwrap(),
        "B1D23E92707A7607893E92E2ADBE6B43"
    );
}

#[test]
fn test_hashes_with_sha1() {
    assert_eq!(
        digest("Hello World", "sha1").unwrap(),
        "0A4D55A8D778E5022FAB701977C5D840BBC486D0"
    );
    assert_eq!(
        digest("Testing", "sha1").unwrap(),
        "0820B32B206B7352858E8903A838ED14319ACDFD"
    );
    assert_eq!(
        digest("~9~N45u7k`25YfN", "sha1").unwrap(),
        "CBF59A0CB5A9C32EFD19EA8926C28D89D87D6D12"
    );
}

#[test]
fn test_hashes_with_sha2() {
    assert_eq!(
        digest("Hello World", "sha2").unwrap(),
        "A591A6D40BF420404A011733CFB7B190D62C65BF0BCDA32B57B277D9AD9F146E"
    );
    assert_eq!(
        digest("Testing", "sha2").unwrap(),
        "E806A291CFC3E61F83B98D344EE57E3E8933CCCECE4FB45E1481F1F560E70EB1"
    );
    assert_eq!(
        digest("~9~N45u7k`25YfN", "sha2").unwrap(),
        "F1EA688AC812EBDF4EB8E78A29CC01AABE5BFF0F9205A1847C81A24223FA3849"
    );
}

#[test]
fn test_sha256_is_an_alias_of_sha2() {
    for input in ["Hello World", "Testing", "~9~N45u7k`25YfN"] {
        assert_eq!(
            digest(input, "sha256").unwrap(),
            digest(input, "sha2").unwrap()
        );
    }
}

#[test]
fn test_hashes_with_rmd160() {
    assert_eq!(
        digest("Hello World", "rmd160").unwrap(),
        "A830D7BEB04EB7549CE990FB7DC962E499A27230"
    );
    assert_eq!(
        digest("Testing", "rmd160").unwrap(),
        "01743C6E71742ED72D6C51537F1790A462B82C82"
    );
    assert_eq!(
        digest("~9~N45u7k`25YfN", "rmd160").unwrap(),
        "D8F8A76D4F6E00DF9D140A68A36E155D60CEB545"
    );
}

#[test]
fn test_rejects_unknown_algorithms() {
    for name in ["test", "123", "Mk8SGz`g"] {
        let err = digest("Hello World", name).unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(ref n) if n == name));
    }
}

#[test]
fn test_algorithm_names_are_case_sensitive() {
    assert!(digest("Hello World", "SHA1").is_err());
    assert!(digest("Hello World", "MD5").is_err());
    assert!(digest("Hello World", "None").is_err());
}

#[test]
fn test_digest_widths() {
    assert_eq!(digest("x", "md5").unwrap().len(), 32);
    assert_eq!(digest("x", "sha1").unwrap().len(), 40);
    assert_eq!(digest("x", "sha256").unwrap().len(), 64);
    assert_eq!(digest("x", "rmd160").unwrap().len(), 40);
}
