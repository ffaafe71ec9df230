//! Demonstrates the two ways to build up a byte sequence and what each one
//! costs in reallocations.
//!
//! The first build starts from an empty buffer and lets the capacity double
//! as the message arrives chunk by chunk, printing every capacity change.
//! The second build knows the total size up front, preallocates it, and
//! never reallocates at all. Both end the same way: the buffer is frozen
//! into an immutable sequence and viewed as text.
//!
//! Run with
//!
//! ```bash
//! cargo run -p growbuf --example hello
//! ```

use growbuf::{AllocError, ByteBuf};

const CHUNKS: [&[u8]; 3] = [b"Hello", b", ", b"world!"];

fn main() -> Result<(), AllocError> {
    // Unknown final size: grow by doubling.
    let mut buf = ByteBuf::new();
    for chunk in CHUNKS {
        let before = buf.capacity();
        for &byte in chunk {
            buf.push(byte)?;
        }
        if buf.capacity() != before {
            println!(
                "grew {:>2} -> {:>2} while appending {:?}",
                before,
                buf.capacity(),
                String::from_utf8_lossy(chunk),
            );
        }
    }

    // Known final size: preallocate once.
    let total: usize = CHUNKS.iter().map(|chunk| chunk.len()).sum();
    let mut exact = ByteBuf::with_capacity(total)?;
    for chunk in CHUNKS {
        exact.extend_from_slice(chunk)?;
    }
    assert_eq!(exact.capacity(), total);

    let message = exact.freeze();
    println!(
        "{} ({} bytes, doubled build ended at capacity {})",
        message.as_bstr(),
        message.len(),
        buf.capacity(),
    );
    Ok(())
}
