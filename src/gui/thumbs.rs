// src/gui/thumbs.rs
//
// Combination thumbnails. One worker thread downloads + decodes in request
// order; the UI thread turns finished images into textures in `poll`.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::core::{net, HttpSource};

#[derive(Clone)]
pub enum Thumb {
    Pending,
    Ready(TextureHandle),
    Failed,
}

type Done = (String, Option<ColorImage>);

pub struct ThumbCache {
    base_url: String,
    px: u32,
    slots: HashMap<String, Thumb>,
    jobs: Option<Sender<String>>,
    done: Option<Receiver<Done>>,
}

impl ThumbCache {
    pub fn new(base_url: impl Into<String>, px: u32) -> Self {
        Self { base_url: base_url.into(), px, slots: HashMap::new(), jobs: None, done: None }
    }

    pub fn px(&self) -> u32 { self.px }

    /// Current state for `image_url`; queues a download the first time it is asked for.
    pub fn get(&mut self, ctx: &egui::Context, image_url: &str) -> Thumb {
        if let Some(t) = self.slots.get(image_url) {
            return t.clone();
        }
        let queued = self.sender(ctx).map(|tx| tx.send(s!(image_url)).is_ok()).unwrap_or(false);
        let t = if queued { Thumb::Pending } else { Thumb::Failed };
        self.slots.insert(s!(image_url), t.clone());
        t
    }

    /// Move finished downloads into textures. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.done else { return };
        loop {
            match rx.try_recv() {
                Ok((url, Some(img))) => {
                    let tex = ctx.load_texture(url.clone(), img, TextureOptions::LINEAR);
                    self.slots.insert(url, Thumb::Ready(tex));
                }
                Ok((url, None)) => {
                    self.slots.insert(url, Thumb::Failed);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    loge!("Thumbs: worker gone");
                    self.jobs = None;
                    self.done = None;
                    break;
                }
            }
        }
    }

    /// Forget failed downloads so the next frame asks for them again.
    pub fn retry_failed(&mut self) {
        self.slots.retain(|_, t| !matches!(t, Thumb::Failed));
    }

    fn sender(&mut self, ctx: &egui::Context) -> Option<&Sender<String>> {
        if self.jobs.is_none() {
            let (job_tx, job_rx) = mpsc::channel::<String>();
            let (done_tx, done_rx) = mpsc::channel::<Done>();
            let base = self.base_url.clone();
            let px = self.px;
            let ctx = ctx.clone();

            thread::spawn(move || {
                let source = match HttpSource::new() {
                    Ok(s) => s,
                    Err(e) => {
                        loge!("Thumbs: no HTTP client: {e}");
                        return;
                    }
                };
                for url in job_rx {
                    let img = fetch_thumb(&source, &base, &url, px);
                    if done_tx.send((url, img)).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
            });

            self.jobs = Some(job_tx);
            self.done = Some(done_rx);
        }
        self.jobs.as_ref()
    }
}

fn fetch_thumb(source: &HttpSource, base: &str, url: &str, px: u32) -> Option<ColorImage> {
    let abs = match net::resolve(base, url) {
        Ok(u) => u,
        Err(e) => {
            logd!("Thumbs: {e}");
            return None;
        }
    };
    let bytes = source
        .get_bytes(abs.as_str())
        .map_err(|e| logd!("Thumbs: {abs}: {e}"))
        .ok()?;
    decode_thumb(&bytes, px)
        .map_err(|e| logd!("Thumbs: decode {abs}: {e}"))
        .ok()
}

/// Decode and shrink to fit `px`×`px`, keeping aspect ratio.
pub fn decode_thumb(bytes: &[u8], px: u32) -> Result<ColorImage, image::ImageError> {
    let img = image::load_from_memory(bytes)?.thumbnail(px, px);
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
