use crate::chart::error::ChartError;
use crate::chart::input::BirthInput;
use crate::chart::result::{Activation, ChartResult, MissingBody, Side};
use crate::chart::settings::{CalculationInfo, ChartSettings, Completeness};
use crate::classify::{classify, compute_profile};
use crate::definition::{compute_definition, home_center};
use crate::design::solve;
use crate::ephemeris::{Body, Ephemeris, LayerPositions};
use crate::gates::gate_and_line;
use crate::geo::PlaceResolver;
use log::debug;
use std::collections::BTreeSet;

/// Computes charts against one ephemeris with fixed settings.
#[derive(Debug, Clone)]
pub struct ChartAssembler<E: Ephemeris> {
    ephemeris: E,
    settings: ChartSettings,
}

impl<E: Ephemeris> ChartAssembler<E> {
    pub fn new(ephemeris: E, settings: ChartSettings) -> Self {
        Self { ephemeris, settings }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Resolve `place` and compute the chart for a local date and time.
    pub fn compute_for_place(
        &self,
        name: &str,
        date: &str,
        time: &str,
        place: &str,
        resolver: &dyn PlaceResolver,
    ) -> Result<ChartResult, ChartError> {
        let input = BirthInput::resolve(name, date, time, place, resolver)?;
        self.compute(&input)
    }

    pub fn compute(&self, input: &BirthInput) -> Result<ChartResult, ChartError> {
        let settings = &self.settings;
        let birth_utc = input.to_utc()?;

        let design_solution = solve(
            &self.ephemeris,
            birth_utc,
            settings.zodiac,
            settings.design_method,
            &settings.solver,
        )?;

        let personality = self.ephemeris.positions(birth_utc, settings.zodiac);
        let design = self.ephemeris.positions(design_solution.instant, settings.zodiac);

        let missing_bodies: Vec<MissingBody> = personality
            .missing
            .iter()
            .map(|&body| MissingBody { side: Side::Personality, body })
            .chain(design.missing.iter().map(|&body| MissingBody { side: Side::Design, body }))
            .collect();
        if settings.completeness == Completeness::Strict && !missing_bodies.is_empty() {
            return Err(ChartError::IncompleteChart {
                missing: missing_bodies,
            });
        }

        let mut activations = side_activations(Side::Personality, &personality);
        activations.extend(side_activations(Side::Design, &design));

        let active_gates: BTreeSet<u8> = activations.iter().filter_map(|a| a.gate).collect();
        debug!("Active gates: {:?}", active_gates);

        let definition = compute_definition(&active_gates);
        let classification = classify(&definition.centers, &definition.channels);
        let profile = compute_profile(personality.get(Body::Sun), design.get(Body::Sun));
        debug!(
            "{} / {} / {} / profile {}",
            classification.hd_type, classification.strategy, classification.authority, profile
        );

        Ok(ChartResult {
            input: input.clone(),
            birth_utc,
            design_utc: design_solution.instant,
            settings: CalculationInfo::from(settings),
            hd_type: classification.hd_type,
            strategy: classification.strategy,
            authority: classification.authority,
            profile,
            undefined_centers: definition.undefined_centers(),
            defined_centers: definition.centers,
            defined_channels: definition.channels,
            active_gates,
            motor_to_throat: classification.motor_to_throat,
            activations,
            design_solution,
            missing_bodies,
        })
    }
}

fn side_activations(side: Side, layer: &LayerPositions) -> Vec<Activation> {
    Body::ALL
        .iter()
        .filter_map(|&body| {
            let longitude = layer.get(body)?;
            let gate_line = gate_and_line(longitude);
            let activation = Activation {
                side,
                body,
                longitude,
                gate: gate_line.map(|gl| gl.gate),
                line: gate_line.map(|gl| gl.line),
                center: gate_line.and_then(|gl| home_center(gl.gate)),
            };
            debug!(
                "{} {}: {:.4}° -> {:?}.{:?}",
                side, body, longitude, activation.gate, activation.line
            );
            Some(activation)
        })
        .collect()
}
