//! Base64 编解码性质验证。
//!
//! # 测试总览（Why）
//! - **往返律**：任意字节序列 `b` 满足 `decode(encode(b)) == b`；
//!   任何由编码器产出的文本 `t` 满足 `encode(decode(t)) == t`。
//! - **长度律**：非空输入的输出长度恒为 `4 * ceil(len/3)`；
//!   空输入产出空文本。
//! - **填充律**：`len % 3 == 1` 时以 `==` 结尾，`== 2` 时以单个 `=`
//!   结尾，`== 0` 时无填充。
//! - 另以公开测试向量（RFC 4648 样例）与十六进制向量做定点校验。

use proptest::prelude::*;

use strand_codec_base64::{decode, encode_slice};

proptest! {
    #[test]
    fn decode_inverts_encode(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let text = encode_slice(&data).expect("编码应成功");
        let text_str = text.as_str().expect("编码输出恒为 ASCII");
        let decoded = decode(text_str).expect("规范文本解码应成功");
        prop_assert_eq!(decoded.content(), &data[..]);
    }

    #[test]
    fn encode_inverts_decode_on_canonical_text(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let text = encode_slice(&data).expect("编码应成功");
        let decoded = decode(text.as_str().expect("编码输出恒为 ASCII")).expect("解码应成功");
        let reencoded = encode_slice(decoded.content()).expect("再编码应成功");
        prop_assert_eq!(reencoded.as_bytes(), text.as_bytes());
    }

    #[test]
    fn output_length_is_four_times_ceil_groups(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let text = encode_slice(&data).expect("编码应成功");
        prop_assert_eq!(text.len(), 4 * data.len().div_ceil(3));
    }

    #[test]
    fn padding_follows_input_length_mod_three(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let text = encode_slice(&data).expect("编码应成功");
        let bytes = text.as_bytes();
        match data.len() % 3 {
            1 => prop_assert!(bytes.ends_with(b"==")),
            2 => {
                prop_assert!(bytes.ends_with(b"="));
                prop_assert!(!bytes.ends_with(b"=="));
            }
            _ => prop_assert!(!bytes.ends_with(b"=")),
        }
    }

    #[test]
    fn encoded_alphabet_is_restricted(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let text = encode_slice(&data).expect("编码应成功");
        prop_assert!(
            text.as_bytes()
                .iter()
                .all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'='))
        );
    }

    #[test]
    fn truncated_text_never_yields_partial_buffer(data in proptest::collection::vec(any::<u8>(), 3..256)) {
        let text = encode_slice(&data).expect("编码应成功");
        let text_str = text.as_str().expect("编码输出恒为 ASCII");
        // 去掉末字符后长度不再是 4 的倍数，必须整体拒绝。
        let truncated = &text_str[..text_str.len() - 1];
        prop_assert!(decode(truncated).is_err());
    }
}

/// RFC 4648 第 10 节的标准测试向量。
#[test]
fn rfc4648_vectors_hold() {
    let vectors: &[(&str, &str)] = &[
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];
    for (plain, expected) in vectors {
        let text = encode_slice(plain.as_bytes()).expect("编码应成功");
        assert_eq!(text.as_str(), Some(*expected), "编码 {plain:?} 结果不符");
        let decoded = decode(expected).expect("解码应成功");
        assert_eq!(decoded.content(), plain.as_bytes(), "解码 {expected:?} 结果不符");
    }
}

/// 以十六进制书写的二进制向量，覆盖高位字节与全零模式。
#[test]
fn binary_vectors_hold() {
    let vectors: &[(&str, &str)] = &[
        ("4d616e", "TWFu"),
        ("ffffff", "////"),
        ("000000", "AAAA"),
        ("fb", "+w=="),
        ("14fb9c03d97e", "FPucA9l+"),
    ];
    for (hex_bytes, expected) in vectors {
        let data = hex::decode(hex_bytes).expect("十六进制向量应合法");
        let text = encode_slice(&data).expect("编码应成功");
        assert_eq!(text.as_str(), Some(*expected), "编码 {hex_bytes} 结果不符");
        let decoded = decode(expected).expect("解码应成功");
        assert_eq!(decoded.content(), &data[..], "解码 {expected} 结果不符");
    }
}
