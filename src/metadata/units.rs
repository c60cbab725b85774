//! Units of measurement

use super::UnitRecord;

pub(super) static UNITS: &[UnitRecord] = &[
    UnitRecord {
        uuid: 0x2700,
        name: "unitless",
        symbol: "",
    },
    UnitRecord {
        uuid: 0x2701,
        name: "length (metre)",
        symbol: "m",
    },
    UnitRecord {
        uuid: 0x2702,
        name: "mass (kilogram)",
        symbol: "kg",
    },
    UnitRecord {
        uuid: 0x2703,
        name: "time (second)",
        symbol: "s",
    },
    UnitRecord {
        uuid: 0x2704,
        name: "electric current (ampere)",
        symbol: "A",
    },
    UnitRecord {
        uuid: 0x2705,
        name: "thermodynamic temperature (kelvin)",
        symbol: "K",
    },
    UnitRecord {
        uuid: 0x2706,
        name: "amount of substance (mole)",
        symbol: "mol",
    },
    UnitRecord {
        uuid: 0x2707,
        name: "luminous intensity (candela)",
        symbol: "cd",
    },
    UnitRecord {
        uuid: 0x2710,
        name: "area (square metres)",
        symbol: "m²",
    },
    UnitRecord {
        uuid: 0x2711,
        name: "volume (cubic metres)",
        symbol: "m³",
    },
    UnitRecord {
        uuid: 0x2712,
        name: "velocity (metres per second)",
        symbol: "m/s",
    },
    UnitRecord {
        uuid: 0x2713,
        name: "acceleration (metres per second squared)",
        symbol: "m/s²",
    },
    UnitRecord {
        uuid: 0x2714,
        name: "wavenumber (reciprocal metre)",
        symbol: "m⁻¹",
    },
    UnitRecord {
        uuid: 0x2715,
        name: "density (kilogram per cubic metre)",
        symbol: "kg/m³",
    },
    UnitRecord {
        uuid: 0x2716,
        name: "surface density (kilogram per square metre)",
        symbol: "kg/m²",
    },
    UnitRecord {
        uuid: 0x2717,
        name: "specific volume (cubic metre per kilogram)",
        symbol: "m³/kg",
    },
    UnitRecord {
        uuid: 0x2718,
        name: "current density (ampere per square metre)",
        symbol: "A/m²",
    },
    UnitRecord {
        uuid: 0x2719,
        name: "magnetic field strength (ampere per metre)",
        symbol: "A/m",
    },
    UnitRecord {
        uuid: 0x271A,
        name: "amount concentration (mole per cubic metre)",
        symbol: "mol/m³",
    },
    UnitRecord {
        uuid: 0x271B,
        name: "mass concentration (kilogram per cubic metre)",
        symbol: "kg/m³",
    },
    UnitRecord {
        uuid: 0x271C,
        name: "luminance (candela per square metre)",
        symbol: "cd/m²",
    },
    UnitRecord {
        uuid: 0x271D,
        name: "refractive index",
        symbol: "",
    },
    UnitRecord {
        uuid: 0x271E,
        name: "relative permeability",
        symbol: "",
    },
    UnitRecord {
        uuid: 0x2720,
        name: "plane angle (radian)",
        symbol: "rad",
    },
    UnitRecord {
        uuid: 0x2721,
        name: "solid angle (steradian)",
        symbol: "sr",
    },
    UnitRecord {
        uuid: 0x2722,
        name: "frequency (hertz)",
        symbol: "Hz",
    },
    UnitRecord {
        uuid: 0x2723,
        name: "force (newton)",
        symbol: "N",
    },
    UnitRecord {
        uuid: 0x2724,
        name: "pressure (pascal)",
        symbol: "Pa",
    },
    UnitRecord {
        uuid: 0x2725,
        name: "energy (joule)",
        symbol: "J",
    },
    UnitRecord {
        uuid: 0x2726,
        name: "power (watt)",
        symbol: "W",
    },
    UnitRecord {
        uuid: 0x2727,
        name: "electric charge (coulomb)",
        symbol: "C",
    },
    UnitRecord {
        uuid: 0x2728,
        name: "electric potential difference (volt)",
        symbol: "V",
    },
    UnitRecord {
        uuid: 0x2729,
        name: "capacitance (farad)",
        symbol: "F",
    },
    UnitRecord {
        uuid: 0x272A,
        name: "electric resistance (ohm)",
        symbol: "Ω",
    },
    UnitRecord {
        uuid: 0x272B,
        name: "electric conductance (siemens)",
        symbol: "S",
    },
    UnitRecord {
        uuid: 0x272C,
        name: "magnetic flux (weber)",
        symbol: "Wb",
    },
    UnitRecord {
        uuid: 0x272D,
        name: "magnetic flux density (tesla)",
        symbol: "T",
    },
    UnitRecord {
        uuid: 0x272E,
        name: "inductance (henry)",
        symbol: "H",
    },
    UnitRecord {
        uuid: 0x272F,
        name: "thermodynamic temperature (degree Celsius)",
        symbol: "°C",
    },
    UnitRecord {
        uuid: 0x2730,
        name: "luminous flux (lumen)",
        symbol: "lm",
    },
    UnitRecord {
        uuid: 0x2731,
        name: "illuminance (lux)",
        symbol: "lx",
    },
    UnitRecord {
        uuid: 0x2732,
        name: "activity referred to a radionuclide (becquerel)",
        symbol: "Bq",
    },
    UnitRecord {
        uuid: 0x2733,
        name: "absorbed dose (gray)",
        symbol: "Gy",
    },
    UnitRecord {
        uuid: 0x2734,
        name: "dose equivalent (sievert)",
        symbol: "Sv",
    },
    UnitRecord {
        uuid: 0x2735,
        name: "catalytic activity (katal)",
        symbol: "kat",
    },
    UnitRecord {
        uuid: 0x2740,
        name: "dynamic viscosity (pascal second)",
        symbol: "Pa·s",
    },
    UnitRecord {
        uuid: 0x2741,
        name: "moment of force (newton metre)",
        symbol: "N·m",
    },
    UnitRecord {
        uuid: 0x2742,
        name: "surface tension (newton per metre)",
        symbol: "N/m",
    },
    UnitRecord {
        uuid: 0x2743,
        name: "angular velocity (radian per second)",
        symbol: "rad/s",
    },
    UnitRecord {
        uuid: 0x2744,
        name: "angular acceleration (radian per second squared)",
        symbol: "rad/s²",
    },
    UnitRecord {
        uuid: 0x2745,
        name: "heat flux density (watt per square metre)",
        symbol: "W/m²",
    },
    UnitRecord {
        uuid: 0x2746,
        name: "heat capacity (joule per kelvin)",
        symbol: "J/K",
    },
    UnitRecord {
        uuid: 0x2747,
        name: "specific heat capacity (joule per kilogram kelvin)",
        symbol: "J/(kg·K)",
    },
    UnitRecord {
        uuid: 0x2748,
        name: "specific energy (joule per kilogram)",
        symbol: "J/kg",
    },
    UnitRecord {
        uuid: 0x2749,
        name: "thermal conductivity (watt per metre kelvin)",
        symbol: "W/(m·K)",
    },
    UnitRecord {
        uuid: 0x274A,
        name: "energy density (joule per cubic metre)",
        symbol: "J/m³",
    },
    UnitRecord {
        uuid: 0x274B,
        name: "electric field strength (volt per metre)",
        symbol: "V/m",
    },
    UnitRecord {
        uuid: 0x274C,
        name: "electric charge density (coulomb per cubic metre)",
        symbol: "C/m³",
    },
    UnitRecord {
        uuid: 0x274D,
        name: "surface charge density (coulomb per square metre)",
        symbol: "C/m²",
    },
    UnitRecord {
        uuid: 0x274E,
        name: "electric flux density (coulomb per square metre)",
        symbol: "C/m²",
    },
    UnitRecord {
        uuid: 0x274F,
        name: "permittivity (farad per metre)",
        symbol: "F/m",
    },
    UnitRecord {
        uuid: 0x2750,
        name: "permeability (henry per metre)",
        symbol: "H/m",
    },
    UnitRecord {
        uuid: 0x2751,
        name: "molar energy (joule per mole)",
        symbol: "J/mol",
    },
    UnitRecord {
        uuid: 0x2752,
        name: "molar entropy (joule per mole kelvin)",
        symbol: "J/(mol·K)",
    },
    UnitRecord {
        uuid: 0x2753,
        name: "exposure (coulomb per kilogram)",
        symbol: "C/kg",
    },
    UnitRecord {
        uuid: 0x2754,
        name: "absorbed dose rate (gray per second)",
        symbol: "Gy/s",
    },
    UnitRecord {
        uuid: 0x2755,
        name: "radiant intensity (watt per steradian)",
        symbol: "W/sr",
    },
    UnitRecord {
        uuid: 0x2756,
        name: "radiance (watt per square metre steradian)",
        symbol: "W/(m²·sr)",
    },
    UnitRecord {
        uuid: 0x2757,
        name: "catalytic activity concentration (katal per cubic metre)",
        symbol: "kat/m³",
    },
    UnitRecord {
        uuid: 0x2760,
        name: "time (minute)",
        symbol: "min",
    },
    UnitRecord {
        uuid: 0x2761,
        name: "time (hour)",
        symbol: "h",
    },
    UnitRecord {
        uuid: 0x2762,
        name: "time (day)",
        symbol: "d",
    },
    UnitRecord {
        uuid: 0x2763,
        name: "plane angle (degree)",
        symbol: "°",
    },
    UnitRecord {
        uuid: 0x2764,
        name: "plane angle (minute)",
        symbol: "′",
    },
    UnitRecord {
        uuid: 0x2765,
        name: "plane angle (second)",
        symbol: "″",
    },
    UnitRecord {
        uuid: 0x2766,
        name: "area (hectare)",
        symbol: "ha",
    },
    UnitRecord {
        uuid: 0x2767,
        name: "volume (litre)",
        symbol: "L",
    },
    UnitRecord {
        uuid: 0x2768,
        name: "mass (tonne)",
        symbol: "t",
    },
    UnitRecord {
        uuid: 0x2780,
        name: "pressure (bar)",
        symbol: "bar",
    },
    UnitRecord {
        uuid: 0x2781,
        name: "pressure (millimetre of mercury)",
        symbol: "mmHg",
    },
    UnitRecord {
        uuid: 0x2782,
        name: "length (ångström)",
        symbol: "Å",
    },
    UnitRecord {
        uuid: 0x2783,
        name: "length (nautical mile)",
        symbol: "NM",
    },
    UnitRecord {
        uuid: 0x2784,
        name: "area (barn)",
        symbol: "b",
    },
    UnitRecord {
        uuid: 0x2785,
        name: "velocity (knot)",
        symbol: "kn",
    },
    UnitRecord {
        uuid: 0x2786,
        name: "logarithmic radio quantity (neper)",
        symbol: "Np",
    },
    UnitRecord {
        uuid: 0x2787,
        name: "logarithmic radio quantity (bel)",
        symbol: "B",
    },
    UnitRecord {
        uuid: 0x27A0,
        name: "length (yard)",
        symbol: "yd",
    },
    UnitRecord {
        uuid: 0x27A1,
        name: "length (parsec)",
        symbol: "pc",
    },
    UnitRecord {
        uuid: 0x27A2,
        name: "length (inch)",
        symbol: "in",
    },
    UnitRecord {
        uuid: 0x27A3,
        name: "length (foot)",
        symbol: "ft",
    },
    UnitRecord {
        uuid: 0x27A4,
        name: "length (mile)",
        symbol: "mi",
    },
    UnitRecord {
        uuid: 0x27A5,
        name: "pressure (pound-force per square inch)",
        symbol: "psi",
    },
    UnitRecord {
        uuid: 0x27A6,
        name: "velocity (kilometre per hour)",
        symbol: "km/h",
    },
    UnitRecord {
        uuid: 0x27A7,
        name: "velocity (mile per hour)",
        symbol: "mph",
    },
    UnitRecord {
        uuid: 0x27A8,
        name: "angular velocity (revolution per minute)",
        symbol: "rpm",
    },
    UnitRecord {
        uuid: 0x27A9,
        name: "energy (gram calorie)",
        symbol: "cal",
    },
    UnitRecord {
        uuid: 0x27AA,
        name: "energy (kilogram calorie)",
        symbol: "kcal",
    },
    UnitRecord {
        uuid: 0x27AB,
        name: "energy (kilowatt hour)",
        symbol: "kWh",
    },
    UnitRecord {
        uuid: 0x27AC,
        name: "thermodynamic temperature (degree Fahrenheit)",
        symbol: "°F",
    },
    UnitRecord {
        uuid: 0x27AD,
        name: "percentage",
        symbol: "%",
    },
    UnitRecord {
        uuid: 0x27AE,
        name: "per mille",
        symbol: "‰",
    },
    UnitRecord {
        uuid: 0x27AF,
        name: "period (beats per minute)",
        symbol: "bpm",
    },
    UnitRecord {
        uuid: 0x27B0,
        name: "electric charge (ampere hours)",
        symbol: "Ah",
    },
    UnitRecord {
        uuid: 0x27B1,
        name: "mass density (milligram per decilitre)",
        symbol: "mg/dL",
    },
    UnitRecord {
        uuid: 0x27B2,
        name: "mass density (millimole per litre)",
        symbol: "mmol/L",
    },
    UnitRecord {
        uuid: 0x27B3,
        name: "time (year)",
        symbol: "y",
    },
    UnitRecord {
        uuid: 0x27B4,
        name: "time (month)",
        symbol: "mo",
    },
    UnitRecord {
        uuid: 0x27B5,
        name: "concentration (count per cubic metre)",
        symbol: "/m³",
    },
    UnitRecord {
        uuid: 0x27B6,
        name: "irradiance (watt per square metre)",
        symbol: "W/m²",
    },
    UnitRecord {
        uuid: 0x27B7,
        name: "milliliter (per kilogram per minute)",
        symbol: "mL/(kg·min)",
    },
    UnitRecord {
        uuid: 0x27B8,
        name: "mass (pound)",
        symbol: "lb",
    },
    UnitRecord {
        uuid: 0x27B9,
        name: "metabolic equivalent",
        symbol: "MET",
    },
    UnitRecord {
        uuid: 0x27BA,
        name: "step (per minute)",
        symbol: "steps/min",
    },
    UnitRecord {
        uuid: 0x27BC,
        name: "stroke (per minute)",
        symbol: "strokes/min",
    },
    UnitRecord {
        uuid: 0x27BD,
        name: "pace (kilometre per minute)",
        symbol: "km/min",
    },
    UnitRecord {
        uuid: 0x27BE,
        name: "luminous efficacy (lumen per watt)",
        symbol: "lm/W",
    },
    UnitRecord {
        uuid: 0x27BF,
        name: "luminous energy (lumen hour)",
        symbol: "lm·h",
    },
    UnitRecord {
        uuid: 0x27C0,
        name: "luminous exposure (lux hour)",
        symbol: "lx·h",
    },
    UnitRecord {
        uuid: 0x27C1,
        name: "mass flow (gram per second)",
        symbol: "g/s",
    },
    UnitRecord {
        uuid: 0x27C2,
        name: "volume flow (litre per second)",
        symbol: "L/s",
    },
    UnitRecord {
        uuid: 0x27C3,
        name: "sound pressure (decibel)",
        symbol: "dB",
    },
    UnitRecord {
        uuid: 0x27C4,
        name: "parts per million",
        symbol: "ppm",
    },
    UnitRecord {
        uuid: 0x27C5,
        name: "parts per billion",
        symbol: "ppb",
    },
    UnitRecord {
        uuid: 0x27C6,
        name: "mass density rate (milligram per decilitre per minute)",
        symbol: "mg/(dL·min)",
    },
    UnitRecord {
        uuid: 0x27C7,
        name: "electrical apparent energy (kilovolt ampere hour)",
        symbol: "kVAh",
    },
    UnitRecord {
        uuid: 0x27C8,
        name: "electrical apparent power (volt ampere)",
        symbol: "VA",
    },
];
