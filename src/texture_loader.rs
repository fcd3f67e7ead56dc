use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

// --- EXIF orientation, 1 when absent or unreadable ---
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&orientation) = values.first() {
                        return orientation;
                    }
                }
            }
            1
        }
        Err(e) => {
            warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

// 2, 4, 5 and 7 are the mirrored variants of 1, 3, 6 and 8.
fn apply_orientation(image: &mut Image, orientation: u16) {
    match orientation {
        2 => image.flip_horizontal(),
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        4 => image.flip_vertical(),
        5 => {
            image.rotate_cw();
            image.flip_horizontal();
        }
        6 => image.rotate_cw(),
        7 => {
            image.rotate_ccw();
            image.flip_horizontal();
        }
        8 => image.rotate_ccw(),
        _ => return,
    }
    debug!(orientation, "applied EXIF orientation");
}

// --- Load an avatar, upright, as a texture ---
pub fn load_avatar(rl: &mut RaylibHandle, thread: &RaylibThread, image_path: &Path) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read avatar {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only reliable in JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode avatar {}: {e}", image_path.display()))?;
    apply_orientation(&mut image, orientation);

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}
