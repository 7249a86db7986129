//! Base64 编码路径。

use alloc::vec::Vec;

use strand_core::{ByteBuffer, Result, mem};
use strand_text::TextBuffer;

use crate::alphabet::{self, PAD};

/// 编码一个字节缓冲的全部内容。
///
/// 等价于对 [`ByteBuffer::content`] 调用 [`encode_slice`]。
pub fn encode(input: &ByteBuffer) -> Result<TextBuffer> {
    encode_slice(input.content())
}

/// 把任意字节序列编码为规范化 Base64 文本。
///
/// # 契约定义（What）
/// - 零长输入产出空文本（不带填充）；
/// - 其余输出长度恒为 `4 * ceil(len/3)`：每 3 字节一组映射 4 个字符，
///   2 字节余量补一个 `=`，1 字节余量补 `==`；
/// - 输出分配一次完成（`终止符 + 组数 × 4`），尺寸算术先查溢出；
///   预留失败时返回错误，不产出部分文本。
pub fn encode_slice(source: &[u8]) -> Result<TextBuffer> {
    if source.is_empty() {
        return Ok(TextBuffer::new());
    }

    let groups = (source.len() - 1) / 3 + 1;
    let total = mem::flex_size(1, groups, 4)?;
    let mut encoded = Vec::new();
    mem::try_reserve_exact(&mut encoded, total)?;

    /* 每组 3 字节按如下位布局拆为 4 个 6-bit 值：
       b0            b1              b2
       7 6 5 4 3 2 1 0 7 6 5 4 3 2 1 0 7 6 5 4 3 2 1 0
       |----c1---| |----c2---| |----c3---| |----c4---|
    */
    let mut chunks = source.chunks_exact(3);
    for chunk in &mut chunks {
        encoded.push(alphabet::encode_6bits(chunk[0] >> 2));
        encoded.push(alphabet::encode_6bits(
            ((chunk[0] & 0x03) << 4) | (chunk[1] >> 4),
        ));
        encoded.push(alphabet::encode_6bits(
            ((chunk[1] & 0x0F) << 2) | ((chunk[2] >> 6) & 0x03),
        ));
        encoded.push(alphabet::encode_6bits(chunk[2] & 0x3F));
    }

    match chunks.remainder() {
        &[b0, b1] => {
            encoded.push(alphabet::encode_6bits(b0 >> 2));
            encoded.push(alphabet::encode_6bits(((b0 & 0x03) << 4) | (b1 >> 4)));
            encoded.push(alphabet::encode_high_nibble(b1 & 0x0F));
            encoded.push(PAD);
        }
        &[b0] => {
            encoded.push(alphabet::encode_6bits(b0 >> 2));
            encoded.push(alphabet::encode_top_two_bits(b0 & 0x03));
            encoded.push(PAD);
            encoded.push(PAD);
        }
        _ => {}
    }

    encoded.push(0);
    TextBuffer::take_ownership(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_byte_group_has_no_padding() {
        let text = encode_slice(&[0x4D, 0x61, 0x6E]).expect("编码应成功");
        assert_eq!(text.as_bytes(), b"TWFu");
    }

    #[test]
    fn two_byte_remainder_pads_once() {
        let text = encode_slice(&[0x4D, 0x61]).expect("编码应成功");
        assert_eq!(text.as_bytes(), b"TWE=");
    }

    #[test]
    fn one_byte_remainder_pads_twice() {
        let text = encode_slice(&[0x4D]).expect("编码应成功");
        assert_eq!(text.as_bytes(), b"TQ==");
    }

    #[test]
    fn empty_input_yields_empty_text() {
        let text = encode_slice(&[]).expect("编码应成功");
        assert!(text.is_empty());
    }

    #[test]
    fn buffer_entry_point_reads_full_content() {
        let buffer = ByteBuffer::from_slice(b"foobar").expect("建成应成功");
        let text = encode(&buffer).expect("编码应成功");
        assert_eq!(text.as_bytes(), b"Zm9vYmFy");
    }

    #[test]
    fn output_length_follows_group_law() {
        for len in 1usize..=9 {
            let source = alloc::vec![0xA5u8; len];
            let text = encode_slice(&source).expect("编码应成功");
            assert_eq!(text.len(), 4 * len.div_ceil(3), "len={len} 的输出长度不符");
        }
    }

    #[test]
    fn high_bit_bytes_round_through_the_alphabet() {
        let text = encode_slice(&[0xFF, 0xFF, 0xFF]).expect("编码应成功");
        assert_eq!(text.as_bytes(), b"////");
        let text = encode_slice(&[0x00, 0x00, 0x00]).expect("编码应成功");
        assert_eq!(text.as_bytes(), b"AAAA");
    }
}
