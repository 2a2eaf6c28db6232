use std::path::PathBuf;

use teknova_core::codec::ExportFormat;

/// File name the export dialog starts with.
const DEFAULT_EXPORT_NAME: &str = "Texture";

/// Ask for an image to open. Blocks until the dialog closes.
pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open image")
        .add_filter(
            "Images",
            &["png", "jpg", "jpeg", "bmp", "tga", "gif", "tif", "tiff", "webp", "ico"],
        )
        .add_filter("All files", &["*"])
        .pick_file()
}

/// Ask where to export the current image. Blocks until the dialog closes.
pub fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export image")
        .add_filter("Images", ExportFormat::dialog_extensions())
        .set_file_name(DEFAULT_EXPORT_NAME)
        .save_file()
}
