/// Picks the surface format.
///
/// The first advertised format is the environment's preferred one; browsers
/// put `getPreferredCanvasFormat()` there.
pub(crate) fn preferred_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if caps.formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(caps.formats[0])
}

/// Format to configure a surface with, or `None` when the adapter cannot
/// present to it.
pub(crate) fn negotiate_format(
    supported: bool,
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if !supported {
        return None;
    }
    preferred_format(caps, prefer_srgb)
}

pub(crate) fn configuration(
    format: wgpu::TextureFormat,
    (width, height): (u32, u32),
    init: &super::GpuInit,
) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: init.present_mode,
        alpha_mode: init.alpha_mode.unwrap_or(wgpu::CompositeAlphaMode::Auto),
        view_formats: vec![],
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::GpuInit;

    fn caps(formats: &[wgpu::TextureFormat]) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn first_format_is_preferred() {
        let c = caps(&[
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ]);
        assert_eq!(preferred_format(&c, false), Some(wgpu::TextureFormat::Rgba8Unorm));
    }

    #[test]
    fn srgb_wins_when_requested() {
        let c = caps(&[
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ]);
        assert_eq!(preferred_format(&c, true), Some(wgpu::TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn srgb_request_falls_back_to_first() {
        let c = caps(&[wgpu::TextureFormat::Bgra8Unorm]);
        assert_eq!(preferred_format(&c, true), Some(wgpu::TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn no_formats() {
        assert_eq!(preferred_format(&caps(&[]), false), None);
    }

    #[test]
    fn unsupported_surface_has_no_format() {
        let c = caps(&[wgpu::TextureFormat::Bgra8Unorm]);
        assert_eq!(negotiate_format(false, &c, false), None);
    }

    #[test]
    fn supported_surface_without_formats_has_no_format() {
        assert_eq!(negotiate_format(true, &caps(&[]), false), None);
    }

    #[test]
    fn supported_surface_uses_preferred_format() {
        let c = caps(&[
            wgpu::TextureFormat::Rgba16Float,
            wgpu::TextureFormat::Bgra8Unorm,
        ]);
        assert_eq!(negotiate_format(true, &c, false), Some(wgpu::TextureFormat::Rgba16Float));
    }

    #[test]
    fn zero_sized_canvas_is_clamped() {
        let config = configuration(wgpu::TextureFormat::Bgra8Unorm, (0, 0), &GpuInit::default());
        assert_eq!((config.width, config.height), (1, 1));
    }

    #[test]
    fn configuration_keeps_format_and_size() {
        let config =
            configuration(wgpu::TextureFormat::Rgba8Unorm, (300, 150), &GpuInit::default());
        assert_eq!(config.format, wgpu::TextureFormat::Rgba8Unorm);
        assert_eq!((config.width, config.height), (300, 150));
        assert_eq!(config.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(config.alpha_mode, wgpu::CompositeAlphaMode::Auto);
    }
}
