//! Rasterizes a proof sheet onto a canvas and downloads it as a PDF.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, Url,
};
use shared::pdf::{decode_data_url, PdfWriter};
use shared::proof::{ProofSheet, SignatureBlock};
use shared::{Error, ErrorCode, Result};

const SHEET_WIDTH: f64 = 640.0;
const SHEET_HEIGHT: f64 = 640.0;
const MARGIN: f64 = 48.0;
const ROW_HEIGHT: f64 = 36.0;
const TEXT_DARK: &str = "#1f2937";
const TEXT_MUTED: &str = "#475569";
const RULE: &str = "#e5e7eb";

fn js_error(context: &str) -> impl Fn(JsValue) -> Error + '_ {
    move |err| Error::with_details(ErrorCode::ExportFailed, context, format!("{:?}", err))
}

fn export_error(message: &str) -> Error {
    Error::new(ErrorCode::ExportFailed, message)
}

pub fn download_proof(sheet: &ProofSheet, file_name: &str, scale: f64) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| export_error("document unavailable"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")
        .map_err(js_error("create canvas"))?
        .dyn_into()
        .map_err(|_| export_error("canvas element has unexpected type"))?;
    let width = (SHEET_WIDTH * scale).round() as u32;
    let height = (SHEET_HEIGHT * scale).round() as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas.get_context("2d")
        .map_err(js_error("get 2d context"))?
        .ok_or_else(|| export_error("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| export_error("2d context has unexpected type"))?;
    ctx.scale(scale, scale).map_err(js_error("scale context"))?;
    draw_sheet(&ctx, sheet).map_err(js_error("draw sheet"))?;

    let data_url = canvas.to_data_url_with_type("image/jpeg").map_err(js_error("encode jpeg"))?;
    let image = decode_data_url(&data_url)?;
    let pdf = PdfWriter::single_image(&image.bytes, width, height);
    log::info!("exporting {} ({} bytes)", file_name, pdf.len());

    save_bytes(&document, &pdf, "application/pdf", file_name)
}

fn centered(ctx: &CanvasRenderingContext2d, font: &str, color: &str, text: &str, x: f64, y: f64) -> std::result::Result<(), JsValue> {
    ctx.set_font(font);
    ctx.set_fill_style_str(color);
    ctx.set_text_align("center");
    ctx.fill_text(text, x, y)
}

fn rule(ctx: &CanvasRenderingContext2d, color: &str, width: f64, y: f64) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    ctx.move_to(MARGIN, y);
    ctx.line_to(SHEET_WIDTH - MARGIN, y);
    ctx.stroke();
}

fn signature(ctx: &CanvasRenderingContext2d, block: &SignatureBlock, x: f64, top: f64) -> std::result::Result<(), JsValue> {
    let mut y = top;
    for line in &block.caption {
        centered(ctx, "14px sans-serif", TEXT_DARK, line, x, y)?;
        y += 22.0;
    }
    // Signing space.
    y += 70.0;
    ctx.set_stroke_style_str(RULE);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(x - 90.0, y);
    ctx.line_to(x + 90.0, y);
    ctx.stroke();
    centered(ctx, "600 14px sans-serif", TEXT_DARK, &block.signer, x, y + 20.0)
}

fn draw_sheet(ctx: &CanvasRenderingContext2d, sheet: &ProofSheet) -> std::result::Result<(), JsValue> {
    let mid = SHEET_WIDTH / 2.0;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, SHEET_WIDTH, SHEET_HEIGHT);

    centered(ctx, "bold 22px sans-serif", TEXT_DARK, sheet.school_name, mid, 64.0)?;
    centered(ctx, "600 18px sans-serif", "#374151", sheet.title, mid, 94.0)?;

    rule(ctx, TEXT_DARK, 2.0, 122.0);
    centered(ctx, "bold 16px sans-serif", TEXT_DARK, sheet.heading, mid, 146.0)?;
    rule(ctx, TEXT_DARK, 2.0, 160.0);

    let value_x = MARGIN + (SHEET_WIDTH - 2.0 * MARGIN) / 3.0;
    let mut y = 196.0;
    ctx.set_text_align("left");
    for row in &sheet.rows {
        ctx.set_font("500 14px sans-serif");
        ctx.set_fill_style_str(TEXT_MUTED);
        ctx.fill_text(row.label, MARGIN + 12.0, y)?;
        ctx.set_font("600 14px sans-serif");
        ctx.set_fill_style_str(TEXT_DARK);
        ctx.fill_text_with_max_width(&row.value, value_x, y, SHEET_WIDTH - MARGIN - value_x - 12.0)?;
        rule(ctx, RULE, 1.0, y + 14.0);
        y += ROW_HEIGHT;
    }

    let top = y + 40.0;
    signature(ctx, &sheet.student, MARGIN + 110.0, top + 22.0)?;
    signature(ctx, &sheet.guardian, SHEET_WIDTH - MARGIN - 110.0, top)?;
    Ok(())
}

fn save_bytes(document: &Document, bytes: &[u8], mime: &str, file_name: &str) -> Result<()> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes).into());
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error("create blob"))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error("create object url"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")
        .map_err(js_error("create anchor"))?
        .dyn_into()
        .map_err(|_| export_error("anchor element has unexpected type"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document.body().ok_or_else(|| export_error("document has no body"))?;
    body.append_child(&anchor).map_err(js_error("attach anchor"))?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url).map_err(js_error("revoke object url"))
}
