use base85_codec::{
    base85::{Decoder, Encoder},
    Configuration, Error, Logger, Mode, PartialLogger,
};
use std::{
    io::{self, Read, Write},
    process,
};

fn main() {
    let logger = Logger::new();
    if let Err(error) = run(&logger) {
        logger.log(error);
        process::exit(1);
    }
}

fn run(logger: &Logger) -> Result<(), Error> {
    let configuration = Configuration::new()?;

    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;
    logger.log(format!("Read {} bytes", input.len()));

    let mut output = io::stdout().lock();
    let mut partial_logger = PartialLogger::new(configuration.log_interval(), logger);
    let mut written = 0;

    match configuration.mode() {
        Mode::Encode => {
            let mut encoder = Encoder::new(configuration.alphabet());
            if let Some(marker) = configuration.zero_group() {
                encoder = encoder.compress_zero_groups(marker)?;
            }
            for chunk in encoder.encode_chunks(&input, configuration.threads(), configuration.chunk_groups()) {
                output.write_all(chunk.as_bytes())?;
                written += chunk.len();
                partial_logger.log(|index| format!("Encoded chunk {}", index));
            }
        }
        Mode::Decode => {
            let mut decoder = Decoder::new(configuration.alphabet());
            if let Some(marker) = configuration.zero_group() {
                decoder = decoder.compress_zero_groups(marker)?;
            }
            let end = input.iter().rposition(|byte| !byte.is_ascii_whitespace()).map_or(0, |index| index + 1);
            for chunk in decoder.decode_chunks(&input[..end], configuration.threads(), configuration.chunk_groups())? {
                let chunk = chunk?;
                output.write_all(&chunk)?;
                written += chunk.len();
                partial_logger.log(|index| format!("Decoded chunk {}", index));
            }
        }
    }
    output.flush()?;

    logger.log(format!("Wrote {} bytes in {} chunks", written, partial_logger.count()));
    Ok(())
}
