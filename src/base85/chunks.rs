//! Whole-buffer transcoding split over a worker pool.
//!
//! Chunks never split a group: encoder chunks hold a multiple of four bytes and
//! decoder chunks end on a group boundary, so the concatenated output is
//! identical to a single call.
//!
//! Every chunk is copied into an owned buffer before it is handed to the pool,
//! so peak memory is about twice the input.

use super::{decode::Error, Decoder, Encoder};
use crate::SequentialThreadPool;

impl<'a> Encoder<'a> {
    pub fn encode_chunks(&self, input: &[u8], threads: usize, groups_per_chunk: usize) -> SequentialThreadPool<String> {
        let alphabet = self.alphabet.clone();
        let zero_group = self.zero_group;
        let chunks: Vec<Vec<u8>> = input.chunks(groups_per_chunk.max(1).saturating_mul(4)).map(<[u8]>::to_vec).collect();
        SequentialThreadPool::new(
            threads.max(1),
            move |chunk: Vec<u8>| {
                Encoder {
                    alphabet: &alphabet,
                    zero_group,
                }
                .encode(chunk)
            },
            chunks.into_iter(),
        )
    }
}

impl<'a> Decoder<'a> {
    /// Byte ranges of consecutive runs of `groups_per_chunk` groups, with the
    /// number of groups preceding each run.
    fn split(&self, input: &[u8], groups_per_chunk: usize) -> Vec<(usize, usize, usize)> {
        let mut chunks = Vec::new();
        let mut start = 0;
        let mut first_group = 0;
        let mut index = 0;
        let mut group = 0;
        while index < input.len() {
            index += match input.get(index) {
                Some(&character) if Some(character) == self.zero_group => 1,
                _ => 5,
            };
            group += 1;
            if group - first_group == groups_per_chunk || index >= input.len() {
                let end = index.min(input.len());
                chunks.push((first_group, start, end));
                start = end;
                first_group = group;
            }
        }
        chunks
    }

    /// Validates the whole input up front, so errors from the chunks can only be
    /// overflows, reported with their absolute group number.
    pub fn decode_chunks(
        &self,
        input: &[u8],
        threads: usize,
        groups_per_chunk: usize,
    ) -> Result<SequentialThreadPool<Result<Vec<u8>, Error>>, Error> {
        self.validate(input)?;
        let alphabet = self.alphabet.clone();
        let zero_group = self.zero_group;
        let chunks: Vec<(usize, Vec<u8>)> = self
            .split(input, groups_per_chunk.max(1))
            .into_iter()
            .map(|(first_group, start, end)| (first_group, input[start..end].to_vec()))
            .collect();
        Ok(SequentialThreadPool::new(
            threads.max(1),
            move |(first_group, chunk): (usize, Vec<u8>)| {
                Decoder {
                    alphabet: &alphabet,
                    zero_group,
                }
                .decode(chunk)
                .map_err(|error| error.shift(first_group))
            },
            chunks.into_iter(),
        ))
    }
}
