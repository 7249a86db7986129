//! `buffer_contract` 集成测试：聚焦 `ByteBuffer` 生命周期与接口契约。
//!
//! # 测试总览（Why）
//! - 校验“空缓冲 → 预建 → 写入 → 冻结”的状态转换是否符合契约；
//! - 覆盖重复预建、零尺寸预建等错误路径，确保返回的错误码稳定；
//! - 验证 `from_slice` 与 `freeze` 的字节一致性。

use strand_core::{ByteBuffer, codes};

#[test]
fn new_buffer_is_empty_with_zero_size() {
    let buffer = ByteBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.size(), 0);
    assert_eq!(buffer.content(), &[] as &[u8]);
}

#[test]
fn pre_build_fills_with_zero_bytes() {
    let mut buffer = ByteBuffer::new();
    buffer.pre_build(5).expect("空缓冲预建应成功");
    assert_eq!(buffer.size(), 5);
    assert_eq!(buffer.content(), &[0, 0, 0, 0, 0]);
}

#[test]
fn pre_build_rejects_second_build() {
    let mut buffer = ByteBuffer::new();
    buffer.pre_build(3).expect("首次预建应成功");
    let err = buffer.pre_build(3).expect_err("重复预建应失败");
    assert_eq!(err.code(), codes::APP_INVALID_ARGUMENT);
    assert_eq!(buffer.size(), 3, "失败不得改变已建成的缓冲");
}

#[test]
fn pre_build_rejects_zero_size() {
    let mut buffer = ByteBuffer::new();
    let err = buffer.pre_build(0).expect_err("零尺寸应失败");
    assert_eq!(err.code(), codes::APP_INVALID_ARGUMENT);
    assert!(buffer.is_empty(), "失败后缓冲仍为空");
}

#[test]
fn content_mut_allows_in_place_fill() {
    let mut buffer = ByteBuffer::new();
    buffer.pre_build(3).expect("预建应成功");
    buffer.content_mut().copy_from_slice(b"abc");
    assert_eq!(buffer.content(), b"abc");
}

#[test]
fn from_slice_copies_verbatim() {
    let buffer = ByteBuffer::from_slice(&[0x4D, 0x61, 0x6E]).expect("复制建成应成功");
    assert_eq!(buffer.size(), 3);
    assert_eq!(buffer.content(), &[0x4D, 0x61, 0x6E]);
}

#[test]
fn freeze_hands_over_identical_bytes() {
    let buffer = ByteBuffer::from_slice(b"hello").expect("复制建成应成功");
    let frozen = buffer.freeze();
    assert_eq!(&frozen[..], b"hello");
}
