use calc_plot_core::{DriverConfig, Simulation};
use calc_plot_sdl2::{PlotStyle, Sdl2Surface};
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Style {
    Points,
    Lines,
}

impl From<Style> for PlotStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Points => PlotStyle::Points,
            Style::Lines => PlotStyle::Lines,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "calc_plot",
    about = "Plot a square wave along with its derivative and integral"
)]
struct Args {
    #[arg(long, default_value = "Win32 Drawing Window")]
    title: String,
    #[arg(long, default_value_t = 50)]
    x: i32,
    #[arg(long, default_value_t = 50)]
    y: i32,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 500)]
    height: u32,
    #[arg(long, default_value_t = 1)]
    point_size: u32,
    #[arg(long, value_enum, default_value_t = Style::Points)]
    style: Style,
    /// Time to hold each sample, in microseconds.
    #[arg(long, default_value_t = 400)]
    sample_delay_us: u64,
    /// Time to sleep per frame once every sample has been drawn, in milliseconds.
    #[arg(long, default_value_t = 10)]
    idle_delay_ms: u64,
    #[arg(long)]
    vsync: bool,
    /// Exit as soon as every sample has been drawn.
    #[arg(long)]
    exit_when_done: bool,
}

impl Args {
    fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            sample_delay: Duration::from_micros(self.sample_delay_us),
            idle_delay: Duration::from_millis(self.idle_delay_ms),
            exit_when_done: self.exit_when_done,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut surface = Sdl2Surface::builder()
        .title(args.title.as_str())
        .position(args.x, args.y)
        .width_px(args.width)
        .height_px(args.height)
        .point_size(args.point_size)
        .style(args.style.into())
        .vsync(args.vsync)
        .build()?;
    let mut simulation = Simulation::new(args.driver_config());
    simulation.run(&mut surface);
    Ok(())
}
