//! Tests for encoding into growable buffers

use hpack_integer::{encode_integer_to_vec, BoundedBuffer, Error, GrowableBuffer, IntegerEncoder};

#[test]
fn test_multiple_integers_in_one_growing_buffer() {
    let mut storage = vec![0u8];
    let mut pos = 0;

    // fits in the existing octet
    let mut encoder = IntegerEncoder::new(10, 5);
    let encoded = encoder.encode(storage.view(pos, storage.len() - pos));
    assert_eq!(encoded.written, 1);
    assert!(encoded.is_complete());
    pos += encoded.written;

    // no room at all, grow by the full size
    let mut encoder = IntegerEncoder::new(1337, 5);
    let encoded = encoder.encode(storage.view(pos, storage.len() - pos));
    assert_eq!(encoded.written, 0);
    assert!(encoded.needs_more());
    storage.grow(3).unwrap();
    let encoded = encoder.encode(storage.view(pos, storage.len() - pos));
    assert_eq!(encoded.written, 3);
    assert!(encoded.is_complete());
    pos += 3;

    // partial room, then grow by the rest
    storage.grow(2).unwrap();
    let mut encoder = IntegerEncoder::new(1337, 5);
    let first = encoder.encode(storage.view(pos, storage.len() - pos));
    assert_eq!(first.written, 2);
    assert!(first.needs_more());
    storage.grow(1).unwrap();
    let resume = pos + first.written;
    let second = encoder.encode(storage.view(resume, storage.len() - resume));
    assert_eq!(second.written, 1);
    assert!(second.is_complete());
    pos += 3;

    storage.grow(1).unwrap();
    let mut encoder = IntegerEncoder::new(10, 5);
    let encoded = encoder.encode(storage.view(pos, storage.len() - pos));
    assert_eq!(encoded.written, 1);
    pos += 1;

    assert_eq!(storage.len(), pos);
    assert_eq!(
        storage,
        vec![
            0b0000_1010,
            0b0001_1111,
            0b1001_1010,
            0b0000_1010,
            0b0001_1111,
            0b1001_1010,
            0b0000_1010,
            0b0000_1010,
        ]
    );
}

#[test]
fn test_encode_into_appends_back_to_back() {
    let mut storage: Vec<u8> = Vec::new();
    let mut pos = 0;
    for value in [10, 1337, 1337, 10] {
        pos += IntegerEncoder::new(value, 5).encode_into(&mut storage, pos).unwrap();
    }
    assert_eq!(storage, vec![0x0A, 0x1F, 0x9A, 0x0A, 0x1F, 0x9A, 0x0A, 0x0A]);
    assert_eq!(pos, storage.len());
}

#[cfg(feature = "bytes")]
#[test]
fn test_encode_into_bytes_mut() {
    let mut storage = bytes::BytesMut::new();
    let written = IntegerEncoder::new(u64::MAX, 5).encode_into(&mut storage, 0).unwrap();
    assert_eq!(written, 11);
    assert_eq!(storage[0], 0x1F);
    assert_eq!(storage[10], 0x01);
}

#[test]
fn test_encode_into_keeps_flags_already_in_buffer() {
    // caller wrote the indexed-field bit before encoding the index
    let mut storage = vec![0x80u8];
    let written = IntegerEncoder::new(200, 7).encode_into(&mut storage, 0).unwrap();
    assert_eq!(written, 2);
    // 200 - 127 = 73
    assert_eq!(storage, vec![0xFF, 0x49]);
}

#[test]
fn test_bounded_buffer_growth_failure_is_hard_error() {
    let mut storage = BoundedBuffer::new(4);
    let mut encoder = IntegerEncoder::new(u64::MAX, 5);
    let err = encoder.encode_into(&mut storage, 0).unwrap_err();
    assert_eq!(err, Error::Grow { requested: 11, len: 0 });
    assert!(!err.is_needs_more());
    assert!(!encoder.is_done());
}

#[test]
fn test_bounded_buffer_within_limit() {
    let mut storage = BoundedBuffer::from_vec(vec![0x40], 8);
    let written = IntegerEncoder::new(1337, 6).encode_into(&mut storage, 1).unwrap();
    assert_eq!(written, 3);
    assert_eq!(storage.len(), 4);
}

#[test]
fn test_encode_integer_to_vec_with_flags() {
    let mut block = Vec::new();
    // indexed header field, index 62 (first dynamic entry)
    assert_eq!(encode_integer_to_vec(62, 7, 0x80, &mut block), Ok(1));
    // dynamic table size update to 4096
    assert_eq!(encode_integer_to_vec(4096, 5, 0x20, &mut block), Ok(3));
    assert_eq!(block, vec![0xBE, 0x3F, 0xE1, 0x1F]);
}
