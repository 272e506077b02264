//! Implements `calc_plot_core::Surface` with an SDL window and renderer.

use anyhow::anyhow;
use calc_plot_core::{Plot, PlotPoint, Surface, SurfaceEvents};
use line_2d::Coord;
use sdl2::{
    EventPump, Sdl,
    event::{Event, WindowEvent},
    pixels::Color,
    rect::Rect,
    render::Canvas,
    video::Window as Sdl2Window,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
    /// Draw each sample as a separate square.
    #[default]
    Points,
    /// Join consecutive samples of a series with a line.
    Lines,
}

pub struct SurfaceBuilder {
    title: Option<String>,
    x: Option<i32>,
    y: Option<i32>,
    width_px: Option<u32>,
    height_px: Option<u32>,
    point_size: Option<u32>,
    style: Option<PlotStyle>,
    vsync: Option<bool>,
}

impl SurfaceBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            x: None,
            y: None,
            width_px: None,
            height_px: None,
            point_size: None,
            style: None,
            vsync: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn width_px(mut self, width_px: u32) -> Self {
        self.width_px = Some(width_px);
        self
    }

    pub fn height_px(mut self, height_px: u32) -> Self {
        self.height_px = Some(height_px);
        self
    }

    pub fn point_size(mut self, point_size: u32) -> Self {
        self.point_size = Some(point_size);
        self
    }

    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = Some(vsync);
        self
    }

    /// Open the window and create its renderer.
    pub fn build(self) -> anyhow::Result<Sdl2Surface> {
        let title = self
            .title
            .unwrap_or_else(|| "Win32 Drawing Window".to_string());
        let width_px = self.width_px.unwrap_or(1000);
        let height_px = self.height_px.unwrap_or(500);
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        // Only takes effect if the renderer ends up using OpenGL. The depth buffer is requested
        // but never used.
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_double_buffer(true);
        gl_attr.set_red_size(8);
        gl_attr.set_green_size(8);
        gl_attr.set_blue_size(8);
        gl_attr.set_depth_size(16);
        let window = video_subsystem
            .window(title.as_str(), width_px, height_px)
            .position(self.x.unwrap_or(50), self.y.unwrap_or(50))
            .opengl()
            .build()?;
        let mut canvas_builder = window.into_canvas();
        if let Some(index) = opengl_driver_index() {
            canvas_builder = canvas_builder.index(index);
        }
        if self.vsync.unwrap_or(false) {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build()?;
        log::debug!("Using renderer: {}", canvas.info().name);
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!(
            "Opened window \"{}\" ({}x{})",
            title,
            width_px,
            height_px
        );
        Ok(Sdl2Surface {
            canvas,
            event_pump,
            _sdl_context: sdl_context,
            width_px,
            height_px,
            point_size: self.point_size.unwrap_or(1).max(1),
            background: Color::RGB(0, 0, 0),
            style: self.style.unwrap_or_default(),
        })
    }
}

impl Default for SurfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn opengl_driver_index() -> Option<u32> {
    sdl2::render::drivers()
        .position(|info| info.name == "opengl")
        .map(|index| index as u32)
}

/// Convert a point in normalized coordinates (-1 to 1 on both axes, y up) to a pixel coordinate
/// (y down). -1 and 1 land on the first and last pixel of each axis.
pub fn to_pixel(point: PlotPoint, width_px: u32, height_px: u32) -> Coord {
    let max_x = width_px.saturating_sub(1) as f32;
    let max_y = height_px.saturating_sub(1) as f32;
    Coord {
        x: ((point.x + 1.0) * 0.5 * max_x) as i32,
        y: ((1.0 - point.y) * 0.5 * max_y) as i32,
    }
}

/// The pixels to fill when drawing a single series.
pub fn series_coords(
    points: &[PlotPoint],
    style: PlotStyle,
    width_px: u32,
    height_px: u32,
) -> Vec<Coord> {
    let coords = points
        .iter()
        .map(|&point| to_pixel(point, width_px, height_px))
        .collect::<Vec<_>>();
    match style {
        PlotStyle::Points => coords,
        PlotStyle::Lines => {
            if coords.len() < 2 {
                return coords;
            }
            let mut line = Vec::new();
            for pair in coords.windows(2) {
                line.extend(line_2d::coords_between(pair[0], pair[1]));
            }
            line
        }
    }
}

/// Fields are dropped in order, so the renderer and window are torn down before the SDL context.
pub struct Sdl2Surface {
    canvas: Canvas<Sdl2Window>,
    event_pump: EventPump,
    _sdl_context: Sdl,
    width_px: u32,
    height_px: u32,
    point_size: u32,
    background: Color,
    style: PlotStyle,
}

impl Sdl2Surface {
    pub fn builder() -> SurfaceBuilder {
        SurfaceBuilder::new()
    }

    fn fill_point(&mut self, Coord { x, y }: Coord) {
        let rect = Rect::new(x, y, self.point_size, self.point_size);
        let _ = self.canvas.fill_rect(rect);
    }

    fn draw_series(&mut self, points: &[PlotPoint]) {
        for coord in
            series_coords(points, self.style, self.width_px, self.height_px)
        {
            self.fill_point(coord);
        }
    }
}

impl Surface for Sdl2Surface {
    fn present(&mut self, plot: &Plot) {
        self.canvas.set_draw_color(self.background);
        self.canvas.clear();
        for (series, points) in plot.iter() {
            let colour = series.colour();
            self.canvas
                .set_draw_color(Color::RGB(colour.r, colour.g, colour.b));
            self.draw_series(points);
        }
        self.canvas.present();
    }

    fn poll_events(&mut self) -> SurfaceEvents {
        let mut events = SurfaceEvents::default();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => events.close_requested = true,
                Event::Window {
                    win_event: WindowEvent::Exposed,
                    ..
                } => events.exposed = true,
                _ => (),
            }
        }
        events
    }
}

impl Drop for Sdl2Surface {
    fn drop(&mut self) {
        log::info!("Closing window");
    }
}
