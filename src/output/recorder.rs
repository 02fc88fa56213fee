use super::{TrajectorySink, SinkError};
use super::super::bodies::Axes;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedBody {
    pub name: String,
    pub trajectory: Vec<Axes>,
    pub label_position: Option<Axes>,
}

/// In-memory sink: keeps everything it receives, in arrival order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryRecorder {
    pub bodies: Vec<RecordedBody>,
    #[serde(skip)]
    pub destination: Option<String>,
}

impl TrajectoryRecorder {
    pub fn new() -> TrajectoryRecorder {
        TrajectoryRecorder { bodies: Vec::new(), destination: None }
    }

    pub fn get(&self, body_name: &str) -> Option<&RecordedBody> {
        self.bodies.iter().find(|recorded| recorded.name == body_name)
    }

    pub fn trajectory(&self, body_name: &str) -> Option<&[Axes]> {
        self.get(body_name).map(|recorded| recorded.trajectory.as_slice())
    }

    pub fn label_position(&self, body_name: &str) -> Option<Axes> {
        self.get(body_name).and_then(|recorded| recorded.label_position)
    }

    pub fn names(&self) -> Vec<&str> {
        self.bodies.iter().map(|recorded| recorded.name.as_str()).collect()
    }

    fn entry(&mut self, body_name: &str) -> &mut RecordedBody {
        match self.bodies.iter().position(|recorded| recorded.name == body_name) {
            Some(index) => &mut self.bodies[index],
            None => {
                self.bodies.push(RecordedBody { name: body_name.to_string(), trajectory: Vec::new(), label_position: None });
                let last = self.bodies.len() - 1;
                &mut self.bodies[last]
            },
        }
    }
}

impl TrajectorySink for TrajectoryRecorder {
    fn receive_trajectory(&mut self, body_name: &str, points: Vec<Axes>) {
        self.entry(body_name).trajectory = points;
    }

    fn receive_label_position(&mut self, body_name: &str, position: Axes) {
        self.entry(body_name).label_position = Some(position);
    }

    fn finalize(&mut self, destination: &str) -> Result<(), SinkError> {
        self.destination = Some(destination.to_string());
        Ok(())
    }
}
