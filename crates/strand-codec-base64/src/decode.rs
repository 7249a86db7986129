//! Base64 解码路径。

use alloc::format;

use strand_core::error::{CoreError, codes};
use strand_core::{ByteBuffer, Result};

use crate::alphabet;

/// 把无法解释的字节视为 0 值参与组装；合法性已由前缀校验保证，
/// 该回退分支实际不可达。
fn value_of(character: u8) -> u8 {
    alphabet::decode_6bits(character).unwrap_or(0)
}

/// 解码一段规范化 Base64 文本。
///
/// # 契约定义（What）
/// - 输入长度必须是 4 的倍数，否则返回 [`codes::CODEC_INVALID_LENGTH`]；
///   空文本解码为零长缓冲。
/// - 合法数据前缀之后只允许 `""`、`"="` 或 `"=="`；其余任何排布
///   （含夹在数据中间的 `=` 或非字母表字节）返回
///   [`codes::CODEC_INVALID_CHARACTER`]，不产出部分缓冲。
/// - 输出尺寸由尾部填充数推导（`len/4*3` 减去每个 `=`），
///   是预建缓冲的权威依据；逐组位拆包随后就地填充。
pub fn decode(text: &str) -> Result<ByteBuffer> {
    let bytes = text.as_bytes();
    if bytes.len() % 4 != 0 {
        return Err(CoreError::new(
            codes::CODEC_INVALID_LENGTH,
            format!("decode: 输入长度 {} 不是 4 的倍数", bytes.len()),
        ));
    }

    let mut output = ByteBuffer::new();
    if bytes.is_empty() {
        return Ok(output);
    }

    // 合法数据前缀止于首个无法落入字母表的字节。
    let data_len = bytes
        .iter()
        .position(|&byte| alphabet::decode_6bits(byte).is_none())
        .unwrap_or(bytes.len());
    let tail = &bytes[data_len..];
    if !matches!(tail, [] | [b'='] | [b'=', b'=']) {
        return Err(CoreError::new(
            codes::CODEC_INVALID_CHARACTER,
            format!(
                "decode: 第 {data_len} 字节 0x{:02X} 不是合法的数据或填充排布",
                tail[0]
            ),
        ));
    }

    let decoded_len = bytes.len() / 4 * 3 - tail.len();
    output.pre_build(decoded_len)?;
    let sink = output.content_mut();

    let data = &bytes[..data_len];
    let mut position = 0;
    let mut quads = data.chunks_exact(4);
    for quad in &mut quads {
        let (c1, c2, c3, c4) = (
            value_of(quad[0]),
            value_of(quad[1]),
            value_of(quad[2]),
            value_of(quad[3]),
        );
        sink[position] = (c1 << 2) | (c2 >> 4);
        sink[position + 1] = ((c2 & 0x0F) << 4) | (c3 >> 2);
        sink[position + 2] = ((c3 & 0x03) << 6) | c4;
        position += 3;
    }

    // 填充校验保证余量只会是 0、2 或 3 个字符。
    match quads.remainder() {
        &[a, b] => {
            sink[position] = (value_of(a) << 2) | (value_of(b) >> 4);
        }
        &[a, b, c] => {
            let (c1, c2, c3) = (value_of(a), value_of(b), value_of(c));
            sink[position] = (c1 << 2) | (c2 >> 4);
            sink[position + 1] = ((c2 & 0x0F) << 4) | (c3 >> 2);
        }
        _ => {}
    }

    Ok(output)
}
