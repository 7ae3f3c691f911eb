// amp-core/src/units.rs

//! Interop with `uom`'s statically typed SI quantities.

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, ElectricCharge as UomElectricCharge,
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
    ElectricalResistance as UomElectricalResistance, Energy as UomEnergy, Length as UomLength,
    Mass as UomMass, MassDensity as UomMassDensity, Power as UomPower, Time as UomTime,
    Velocity as UomVelocity, Volume as UomVolume,
};

use crate::{CoreError, CoreResult, Dimension, Measurement, Unit};

// Public canonical quantity types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type Charge = UomElectricCharge;
pub type Current = UomElectricCurrent;
pub type Potential = UomElectricPotential;
pub type Resistance = UomElectricalResistance;
pub type Energy = UomEnergy;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Concentration = UomMassDensity;
pub type Power = UomPower;
pub type Time = UomTime;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

impl Measurement {
    fn si_of(&self, expected: Dimension) -> CoreResult<f64> {
        let actual = self.dimension();
        if actual != expected {
            return Err(CoreError::WrongDimension { expected, actual });
        }
        Ok(self.to_si())
    }

    pub fn to_length(&self) -> CoreResult<Length> {
        use uom::si::length::meter;
        Ok(Length::new::<meter>(self.si_of(Dimension::Length)?))
    }

    pub fn to_time(&self) -> CoreResult<Time> {
        use uom::si::time::second;
        Ok(Time::new::<second>(self.si_of(Dimension::Duration)?))
    }

    pub fn to_velocity(&self) -> CoreResult<Velocity> {
        use uom::si::velocity::meter_per_second;
        Ok(Velocity::new::<meter_per_second>(
            self.si_of(Dimension::Speed)?,
        ))
    }

    pub fn to_acceleration(&self) -> CoreResult<Accel> {
        use uom::si::acceleration::meter_per_second_squared;
        Ok(Accel::new::<meter_per_second_squared>(
            self.si_of(Dimension::Acceleration)?,
        ))
    }

    pub fn to_mass(&self) -> CoreResult<Mass> {
        use uom::si::mass::kilogram;
        Ok(Mass::new::<kilogram>(self.si_of(Dimension::Mass)?))
    }

    pub fn to_volume(&self) -> CoreResult<Volume> {
        use uom::si::volume::cubic_meter;
        Ok(Volume::new::<cubic_meter>(self.si_of(Dimension::Volume)?))
    }

    pub fn to_area(&self) -> CoreResult<Area> {
        use uom::si::area::square_meter;
        Ok(Area::new::<square_meter>(self.si_of(Dimension::Area)?))
    }

    pub fn to_concentration(&self) -> CoreResult<Concentration> {
        use uom::si::mass_density::kilogram_per_cubic_meter;
        // Base g/L is numerically kg/m³.
        Ok(Concentration::new::<kilogram_per_cubic_meter>(
            self.si_of(Dimension::ConcentrationMass)?,
        ))
    }

    pub fn to_energy(&self) -> CoreResult<Energy> {
        use uom::si::energy::joule;
        Ok(Energy::new::<joule>(self.si_of(Dimension::Energy)?))
    }

    pub fn to_power(&self) -> CoreResult<Power> {
        use uom::si::power::watt;
        Ok(Power::new::<watt>(self.si_of(Dimension::Power)?))
    }
}

impl From<Length> for Measurement {
    fn from(q: Length) -> Self {
        use uom::si::length::meter;
        Measurement::new(q.get::<meter>(), Unit::Meters)
    }
}

impl From<Time> for Measurement {
    fn from(q: Time) -> Self {
        use uom::si::time::second;
        Measurement::new(q.get::<second>(), Unit::Seconds)
    }
}

impl From<Velocity> for Measurement {
    fn from(q: Velocity) -> Self {
        use uom::si::velocity::meter_per_second;
        Measurement::new(q.get::<meter_per_second>(), Unit::MetersPerSecond)
    }
}

impl From<Mass> for Measurement {
    fn from(q: Mass) -> Self {
        use uom::si::mass::kilogram;
        Measurement::new(q.get::<kilogram>(), Unit::Kilograms)
    }
}
