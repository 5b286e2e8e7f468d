use anyhow::{anyhow, bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{FromSample, SampleFormat, SizedSample, Stream};
use log::{debug, info};
use std::sync::Arc;

use super::{CallbackStatus, Renderer};
use crate::config::EngineConfig;
use crate::core::VoiceState;
use crate::messaging::{EngineEvent, EventSender};

/// Open (but do not start) an output stream on the default device.
pub fn open_output_stream(
    config: &EngineConfig,
    voice: Arc<VoiceState>,
    events: EventSender,
) -> Result<Stream> {
    let host = cpal::default_host();
    info!("Using audio host: {}", host.id().name());

    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("No audio devices found"))?;
    info!(
        "Using output device: {}",
        device.name().unwrap_or_else(|_| "<unnamed>".to_string())
    );

    let default_config = device
        .default_output_config()
        .context("Failed to query default output config")?;
    debug!("Device default config: {:?}", default_config);

    let sample_format = default_config.sample_format();
    let stream_config = cpal::StreamConfig {
        channels: config.channels,
        sample_rate: cpal::SampleRate(config.sample_rate),
        buffer_size: cpal::BufferSize::Fixed(config.buffer_frames),
    };
    info!(
        "Opening stream: {} Hz, {} channels, {} frames per buffer, {:?}",
        config.sample_rate, config.channels, config.buffer_frames, sample_format
    );

    let renderer = Renderer::new(config, voice);
    match sample_format {
        SampleFormat::F32 => create_stream::<f32>(&device, &stream_config, renderer, events),
        SampleFormat::I16 => create_stream::<i16>(&device, &stream_config, renderer, events),
        SampleFormat::U16 => create_stream::<u16>(&device, &stream_config, renderer, events),
        other => bail!("Unsupported sample format {:?}", other),
    }
}

fn create_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut renderer: Renderer,
    events: EventSender,
) -> Result<Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let error_events = events.clone();
    let err_fn = move |err: cpal::StreamError| {
        error_events.notify(EngineEvent::StreamError(err.to_string()));
    };

    let stream = device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                if renderer.render(data) == CallbackStatus::Abort {
                    events.notify(EngineEvent::RenderAborted);
                }
            },
            err_fn,
            None,
        )
        .context("Failed to open stream")?;

    Ok(stream)
}
