use crate::huffman_coding::codes::Code;

/// Creates a bitstream for output, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Bits waiting to become a full byte, aligned to the least significant end.
    queue: u8,
    q_bits: u8,
    /// Bits written so far, padding excluded.
    bit_count: u64,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to push the
    /// last partial byte before using the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue = (self.queue << 1) | bit as u8;
        self.q_bits += 1;
        self.bit_count += 1;
        if self.q_bits == 8 {
            self.output.push(self.queue);
            self.queue = 0;
            self.q_bits = 0;
        }
    }

    /// Puts every bit of a code on the stream, first bit first.
    pub fn out_code(&mut self, code: &Code) {
        code.bits().iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.output.push(self.queue << (8 - self.q_bits));
            self.queue = 0;
            self.q_bits = 0;
        }
    }

    /// Valid (non padding) bits written.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Consume the packer, returning the valid-bit count and the padded bytes.
    pub fn finish(mut self) -> (u64, Vec<u8>) {
        self.flush();
        (self.bit_count, self.output)
    }
}
