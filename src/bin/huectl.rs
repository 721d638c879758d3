//! Command line access to a Hue bridge.
//!
//! Run with: cargo run --features cli --bin huectl -- --help

use clap::{Parser, Subcommand, ValueEnum};
use hueclient::codec::Resource;
use hueclient::patch::Patch;
use hueclient::value::{Brightness, CieXy, LightEffect, Mirek, RecallAction};
use hueclient::{Bridge, BridgeConfig, ResourceApi};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "huectl")]
#[command(about = "Inspect and control a Philips Hue bridge", long_about = None)]
struct Cli {
    /// Hostname or IP address of the bridge
    #[arg(long, env = "HUE_BRIDGE")]
    bridge: String,

    /// Application key obtained when pairing with the bridge
    #[arg(long, env = "HUE_APPLICATION_KEY", hide_env_values = true)]
    application_key: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 2)]
    timeout: u64,

    /// Skip certificate verification
    #[arg(long)]
    insecure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Lights,
    Scenes,
    Rooms,
    Zones,
    GroupedLights,
    Devices,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the resources of one kind
    List { kind: Kind },

    /// Change the state of a light, or of a grouped light with --group
    Light {
        id: String,

        #[arg(long)]
        group: bool,

        /// Transition time in milliseconds
        #[arg(long)]
        transition: Option<u32>,

        #[command(subcommand)]
        cmd: LightCommand,
    },

    /// Recall a scene
    Recall {
        id: String,

        #[arg(long, default_value = "active")]
        action: RecallAction,
    },
}

#[derive(Subcommand, Debug)]
enum LightCommand {
    On,
    Off,
    /// Brightness in percent (0 excluded)
    Brightness { percent: f64 },
    Temperature { kelvin: u32 },
    Xy { x: f64, y: f64 },
    Effect { effect: LightEffect },
}

impl LightCommand {
    fn patch(&self) -> hueclient::Result<Patch> {
        let patch = Patch::new();
        Ok(match self {
            LightCommand::On => patch.on(),
            LightCommand::Off => patch.off(),
            LightCommand::Brightness { percent } => patch.with_brightness(Brightness::new(*percent)?),
            LightCommand::Temperature { kelvin } => patch.with_mirek(Mirek::from_kelvin(*kelvin)?),
            LightCommand::Xy { x, y } => patch.with_xy(CieXy::new(*x, *y)?),
            LightCommand::Effect { effect } => patch.with_effect(*effect),
        })
    }
}

async fn list<R: Resource>(
    api: ResourceApi<'_, R, Bridge>,
    describe: impl Fn(&R) -> String,
) -> hueclient::Result<()> {
    let list = api.list().await?;
    for resource in &list.resources {
        println!("{}  {}", resource.id(), describe(resource));
    }
    for (index, err) in &list.errors {
        log::warn!("entry #{index} skipped: {err}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> hueclient::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let bridge = BridgeConfig::new(&cli.bridge, cli.application_key)
        .with_timeout(Duration::from_secs(cli.timeout))
        .danger_accept_invalid_certs(cli.insecure)
        .connect()?;
    log::info!("using bridge at {}", bridge.base_url());

    match cli.command {
        Commands::List { kind } => match kind {
            Kind::Lights => {
                list(bridge.lights(), |light| {
                    let state = if light.is_on() { "on" } else { "off" };
                    format!("{:<32} {state}", light.metadata.name())
                })
                .await?
            }
            Kind::Scenes => list(bridge.scenes(), |scene| scene.metadata.name().to_string()).await?,
            Kind::Rooms => list(bridge.rooms(), |room| room.metadata.name().to_string()).await?,
            Kind::Zones => list(bridge.zones(), |zone| zone.metadata.name().to_string()).await?,
            Kind::GroupedLights => {
                list(bridge.grouped_lights(), |group| {
                    format!("{} {}", group.owner.rtype, group.owner.rid)
                })
                .await?
            }
            Kind::Devices => {
                list(bridge.devices(), |device| {
                    format!(
                        "{:<32} {}",
                        device.metadata.name(),
                        device.product_data.product_name.as_deref().unwrap_or("-")
                    )
                })
                .await?
            }
        },
        Commands::Light {
            id,
            group,
            transition,
            cmd,
        } => {
            let mut patch = cmd.patch()?;
            if let Some(ms) = transition {
                patch = patch.with_transition_time(ms);
            }
            if group {
                bridge.grouped_lights().update(&id, &patch).await?;
            } else {
                bridge.lights().update(&id, &patch).await?;
            }
            log::info!("{id} updated");
        }
        Commands::Recall { id, action } => {
            bridge.scenes().recall(&id, action).await?;
            log::info!("scene {id} recalled");
        }
    }
    Ok(())
}
