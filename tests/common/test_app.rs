use bevy::prelude::*;
use flyer_airfoil::{
    components::{PhysicsComponent, SpatialComponent},
    config::{AerodynamicsConfig, VehicleAeroConfig},
    plugins::AerodynamicsPlugin,
    resources::GroundPlane,
};
use std::time::Duration;

use super::DT;

/// Builder for a headless app running the aerodynamics plugin
#[derive(Default)]
pub struct TestAppBuilder {
    config: AerodynamicsConfig,
    ground: Option<GroundPlane>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AerodynamicsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_ground(mut self, ground: GroundPlane) -> Self {
        self.ground = Some(ground);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f64(DT));

        app.insert_resource(time)
            .add_plugins(AerodynamicsPlugin::new(self.config));
        if let Some(ground) = self.ground {
            app.insert_resource(ground);
        }

        TestApp { app }
    }
}

/// Headless app stepped one fixed tick at a time
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn spawn_vehicle(
        &mut self,
        vehicle: &VehicleAeroConfig,
        spatial: SpatialComponent,
        physics: PhysicsComponent,
    ) -> Entity {
        self.app
            .world_mut()
            .spawn((vehicle.vehicle_bundle(), spatial, physics))
            .id()
    }

    /// Runs the fixed-timestep schedule once
    pub fn step(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.app
            .world()
            .get::<T>(entity)
            .expect("entity should have the component")
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }
}
