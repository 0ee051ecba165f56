//! Interactive watermarking tool.
//!
//! Reads every piece of configuration from stdin, one line per prompt, in
//! a fixed order. Any invalid line is fatal: the error message is printed
//! and the process terminates without writing output.

use std::io::{self, BufRead};

use watermark::codec::{self, OutputFormat};
use watermark::{
    check_color_model, compose, Error, ImageRole, LineInput, RasterImage, Result, Unstoppable,
    WatermarkConfig,
};

/// Line input over stdin, with prompts echoed to stdout.
struct StdinInput;

impl LineInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        println!("{prompt}");
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::Io(e.to_string()))?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Prompt for a filename, then read and decode the image.
fn load_image(input: &mut impl LineInput, prompt: &str) -> Result<RasterImage> {
    let name = input.read_line(prompt)?;
    let bytes = std::fs::read(&name).map_err(|_| Error::ImageUnavailable(name.clone()))?;
    codec::decode(&bytes)
}

fn run(input: &mut impl LineInput) -> Result<String> {
    let base = load_image(input, "Input the image filename:")?;
    check_color_model(&base, ImageRole::Base)?;

    let mark = load_image(input, "Input the watermark image filename:")?;
    let config = WatermarkConfig::from_input(&base, mark, input)?;

    let output = compose(&base, &config, Unstoppable)?;

    let name = input.read_line("Input the output image filename (jpg or png extension):")?;
    let format = OutputFormat::from_file_name(&name).ok_or(Error::InvalidOutputExtension)?;
    let bytes = codec::encode(&output, format)?;
    std::fs::write(&name, bytes).map_err(|e| Error::Io(e.to_string()))?;
    Ok(name)
}

fn main() {
    match run(&mut StdinInput) {
        Ok(name) => println!("The watermarked image {name} has been created."),
        // Validation failures report their message and end the run quietly
        Err(err) => println!("{err}"),
    }
}
