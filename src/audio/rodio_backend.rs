use super::SceneAudio;
use crate::config::AudioConfig;
use crate::core::error::{AudioError, AudioResult};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

const MUSIC_SINK: &str = "music";
const FIREWORK_SINK: &str = "firework";

pub struct AudioService {
    _stream: OutputStream,
    sinks: HashMap<String, Sink>,
}

impl AudioService {
    pub fn new() -> AudioResult<Self> {
        let stream =
            OutputStreamBuilder::open_default_stream().map_err(|_| AudioError::DeviceInit)?;
        Ok(Self {
            _stream: stream,
            sinks: HashMap::new(),
        })
    }

    /// 在名为 `name` 的通道上播放；同名通道已存在时直接替换
    pub fn play_sound(&mut self, name: &str, path: &str, volume: f32, looped: bool) -> AudioResult<()> {
        self.stop_sound(name);

        let file = File::open(path).map_err(|_| AudioError::FileNotFound(path.to_string()))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| AudioError::DecodeFailed(format!("{}: {}", path, e)))?;

        let sink = Sink::connect_new(self._stream.mixer());
        sink.set_volume(volume);
        if looped {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }
        self.sinks.insert(name.to_string(), sink);
        Ok(())
    }

    pub fn stop_sound(&mut self, name: &str) {
        if let Some(sink) = self.sinks.remove(name) {
            sink.stop();
        }
    }

    pub fn cleanup(&mut self) {
        self.sinks.retain(|_, sink| !sink.empty());
    }
}

/// rodio 实现的场景音频
pub struct RodioAudio {
    service: AudioService,
    config: AudioConfig,
}

impl RodioAudio {
    pub fn new(config: AudioConfig) -> AudioResult<Self> {
        Ok(Self {
            service: AudioService::new()?,
            config,
        })
    }
}

impl SceneAudio for RodioAudio {
    fn start_background_music(&mut self) {
        if let Err(e) = self.service.play_sound(
            MUSIC_SINK,
            &self.config.music_path,
            self.config.music_volume,
            true,
        ) {
            tracing::warn!(target: "audio", "Background music unavailable: {}", e);
        }
    }

    fn play_firework(&mut self) {
        self.service.cleanup();
        if let Err(e) = self.service.play_sound(
            FIREWORK_SINK,
            &self.config.firework_path,
            self.config.firework_volume,
            false,
        ) {
            tracing::warn!(target: "audio", "Firework sound unavailable: {}", e);
        }
    }
}
