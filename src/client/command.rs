use crate::constant::COMMAND_API_VERSION;

use serde::{Serialize, Serializer};

use std::fmt::{self, Display};

const PATTERN_API_VERSION: u8 = 2;
const PATTERN_MIN_INTERVAL_MS: u32 = 100;
const PATTERN_MAX_STEPS: usize = 50;
const PATTERN_MAX_STRENGTH: i32 = 20;

/// Functions a toy can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Vibrate,
    Rotate,
    Pump,
    Thrusting,
    Fingering,
    Suction,
    Depth,
    /// Every function the toy supports
    All,
    /// Stop the toy. Carries no strength.
    Stop,
}

impl ActionKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Vibrate => "Vibrate",
            Self::Rotate => "Rotate",
            Self::Pump => "Pump",
            Self::Thrusting => "Thrusting",
            Self::Fingering => "Fingering",
            Self::Suction => "Suction",
            Self::Depth => "Depth",
            Self::All => "All",
            Self::Stop => "Stop",
        }
    }

    /// Highest strength the function accepts.
    ///
    /// # Panics
    ///
    /// [`ActionKind::Stop`] has no strength range.
    pub fn max_strength(self) -> u32 {
        match self {
            Self::Vibrate
            | Self::Rotate
            | Self::Thrusting
            | Self::Fingering
            | Self::Suction
            | Self::All => 20,

            Self::Pump | Self::Depth => 3,

            Self::Stop => panic!("Action {} has no max strength", self.name()),
        }
    }

    /// Clamp a requested strength into `0..=max_strength()`
    pub fn clamp(self, strength: i32) -> u32 {
        strength.max(0).min(self.max_strength() as i32) as u32
    }

    fn pattern_feature(self) -> Option<char> {
        match self {
            Self::Vibrate => Some('v'),
            Self::Rotate => Some('r'),
            Self::Pump => Some('p'),
            Self::Thrusting => Some('t'),
            Self::Fingering => Some('f'),
            Self::Suction => Some('s'),
            Self::Depth => Some('d'),
            Self::All | Self::Stop => None,
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single actuator directive, e.g. vibrate at strength 12
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    kind: ActionKind,
    strength: Option<i32>,
}

impl Action {
    pub fn new(kind: ActionKind, strength: i32) -> Self {
        Self {
            kind,
            strength: Some(strength),
        }
    }

    pub fn stop() -> Self {
        ActionKind::Stop.into()
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Directive as sent to Lovense, e.g. `"Vibrate:12"` or `"Stop"`
    pub fn directive(&self) -> String {
        match self.kind {
            ActionKind::Stop => self.kind.name().to_string(),
            kind => format!("{}:{}", kind, kind.clamp(self.strength.unwrap_or(0))),
        }
    }
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Action {
        Action {
            kind,
            strength: None,
        }
    }
}

impl From<(ActionKind, i32)> for Action {
    fn from((kind, strength): (ActionKind, i32)) -> Action {
        Action::new(kind, strength)
    }
}

impl From<Action> for Vec<Action> {
    fn from(action: Action) -> Vec<Action> {
        vec![action]
    }
}

/// Join directives into the `action` field of a `Function` command
pub fn build_action(actions: &[Action]) -> String {
    actions
        .iter()
        .map(Action::directive)
        .collect::<Vec<String>>()
        .join(",")
}

/// Requested running time in seconds. Omitted or zero means indefinite,
/// anything else runs at least one second.
fn running_time(duration: Option<f64>) -> f64 {
    match duration {
        Some(secs) if secs != 0.0 && !secs.is_nan() => secs.max(1.0),
        _ => 0.0,
    }
}

/// Targeting and timing shared by the action commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecuteOptions {
    toy: Option<String>,
    duration: Option<f64>,
    loop_running: Option<f64>,
    loop_pause: Option<f64>,
    stop_previous: Option<bool>,
}

impl ExecuteOptions {
    /// Target every connected toy
    pub fn all() -> Self {
        Self::default()
    }

    /// Target a single toy by id
    pub fn toy<S: Into<String>>(id: S) -> Self {
        Self {
            toy: Some(id.into()),
            ..Self::default()
        }
    }

    /// Total running time in seconds
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    /// Run for `running` seconds, pause for `pause` seconds, repeat until the duration ends
    pub fn looping(mut self, running: f64, pause: f64) -> Self {
        self.loop_running = Some(running);
        self.loop_pause = Some(pause);
        self
    }

    /// Whether the command replaces previous commands still running on the toy
    pub fn stop_previous(mut self, stop: bool) -> Self {
        self.stop_previous = Some(stop);
        self
    }

    pub fn target(&self) -> Option<&str> {
        self.toy.as_deref()
    }

    fn apply(&self, mut command: Command) -> Command {
        command.loop_running_sec = self.loop_running.map(|secs| secs.max(1.0));
        command.loop_pause_sec = self.loop_pause.map(|secs| secs.max(1.0));
        command.stop_previous = self.stop_previous.map(u8::from);
        command
    }
}

/// Request body sent to the Lovense app or server
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strength: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "seconds")]
    time_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "seconds")]
    loop_running_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "seconds")]
    loop_pause_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    toy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_previous: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_ver: Option<u8>,
}

impl Command {
    fn new(command: &'static str) -> Self {
        Self {
            command,
            action: None,
            rule: None,
            strength: None,
            name: None,
            time_sec: None,
            loop_running_sec: None,
            loop_pause_sec: None,
            toy: None,
            stop_previous: None,
            api_ver: None,
        }
    }

    /// List the toys connected to the app
    pub fn get_toys() -> Self {
        Self::new("GetToys")
    }

    /// Run a directive string built by [`build_action`]. No toy means every toy.
    pub fn function(toy: Option<&str>, duration: Option<f64>, action: String) -> Self {
        Self {
            action: Some(action),
            time_sec: Some(running_time(duration)),
            toy: toy.map(str::to_string),
            api_ver: Some(COMMAND_API_VERSION),
            ..Self::new("Function")
        }
    }

    pub(crate) fn actions(options: &ExecuteOptions, actions: &[Action]) -> Self {
        options.apply(Self::function(
            options.target(),
            options.duration,
            build_action(actions),
        ))
    }

    /// Stop every function of the toy
    pub fn stop(toy: Option<&str>) -> Self {
        Self::function(toy, None, build_action(&[Action::stop()]))
    }

    /// Play a strength pattern, one step every `interval_ms` milliseconds.
    ///
    /// Strengths are clamped into `0..=20` and at most 50 steps are sent. An empty
    /// feature list drives every function of the toy.
    pub fn pattern(
        options: &ExecuteOptions,
        features: &[ActionKind],
        interval_ms: u32,
        strengths: &[i32],
    ) -> Self {
        let features: String = features
            .iter()
            .filter_map(|kind| kind.pattern_feature())
            .collect();
        let strength = strengths
            .iter()
            .take(PATTERN_MAX_STEPS)
            .map(|s| (*s).max(0).min(PATTERN_MAX_STRENGTH).to_string())
            .collect::<Vec<String>>()
            .join(";");

        options.apply(Self {
            rule: Some(format!(
                "V:1;F:{};S:{}#",
                features,
                interval_ms.max(PATTERN_MIN_INTERVAL_MS)
            )),
            strength: Some(strength),
            time_sec: Some(running_time(options.duration)),
            toy: options.toy.clone(),
            api_ver: Some(PATTERN_API_VERSION),
            ..Self::new("Pattern")
        })
    }

    /// Play one of the app's presets, e.g. "pulse", "wave", "fireworks" or "earthquake"
    pub fn preset<S: Into<String>>(options: &ExecuteOptions, name: S) -> Self {
        Self {
            name: Some(name.into()),
            time_sec: Some(running_time(options.duration)),
            toy: options.toy.clone(),
            api_ver: Some(COMMAND_API_VERSION),
            ..Self::new("Preset")
        }
    }

    pub fn command(&self) -> &str {
        self.command
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn toy(&self) -> Option<&str> {
        self.toy.as_deref()
    }

    pub fn time_sec(&self) -> Option<f64> {
        self.time_sec
    }
}

// Whole seconds go out as integers
fn seconds<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(secs) if secs.fract() == 0.0 && *secs >= 0.0 && *secs <= u32::MAX as f64 => {
            serializer.serialize_u64(*secs as u64)
        }
        Some(secs) => serializer.serialize_f64(*secs),
        None => serializer.serialize_none(),
    }
}
