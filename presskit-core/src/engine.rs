use anyhow::Context;
use rodio::{
    DeviceTrait, OutputStream, OutputStreamBuilder, Sink,
    cpal::{self, traits::HostTrait},
};

/// Audio output path: default device, open stream, one sink.
///
/// Built lazily by the resource thread on the first play request so that
/// loading a source on a machine with no output device still works.
pub struct OutputEngine {
    _stream: OutputStream,
    sink: Sink,
    device_name: String,
}

impl OutputEngine {
    pub fn try_new_default() -> anyhow::Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("No default output device found")?;

        let device_name = device.name().unwrap_or_else(|_| "(unknown)".to_string());

        let stream_builder = OutputStreamBuilder::from_device(device)
            .context("Cannot create output stream builder from device")?;

        let stream = stream_builder
            .open_stream()
            .context("Cannot open output stream")?;

        let sink = Sink::connect_new(&stream.mixer());

        Ok(OutputEngine {
            _stream: stream,
            sink,
            device_name,
        })
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}
