//! Characteristic UUID assignments

use super::UuidRecord;

pub(super) static CHARACTERISTICS: &[UuidRecord] = &[
    UuidRecord::new(0x2A00, "Device Name", "org.bluetooth.characteristic.gap.device_name"),
    UuidRecord::new(0x2A01, "Appearance", "org.bluetooth.characteristic.gap.appearance"),
    UuidRecord::new(0x2A02, "Peripheral Privacy Flag", "org.bluetooth.characteristic.gap.peripheral_privacy_flag"),
    UuidRecord::new(0x2A03, "Reconnection Address", "org.bluetooth.characteristic.gap.reconnection_address"),
    UuidRecord::new(0x2A04, "Peripheral Preferred Connection Parameters", "org.bluetooth.characteristic.gap.peripheral_preferred_connection_parameters"),
    UuidRecord::new(0x2A05, "Service Changed", "org.bluetooth.characteristic.gatt.service_changed"),
    UuidRecord::new(0x2A06, "Alert Level", "org.bluetooth.characteristic.alert_level"),
    UuidRecord::new(0x2A07, "Tx Power Level", "org.bluetooth.characteristic.tx_power_level"),
    UuidRecord::new(0x2A08, "Date Time", "org.bluetooth.characteristic.date_time"),
    UuidRecord::new(0x2A09, "Day of Week", "org.bluetooth.characteristic.day_of_week"),
    UuidRecord::new(0x2A0A, "Day Date Time", "org.bluetooth.characteristic.day_date_time"),
    UuidRecord::new(0x2A0C, "Exact Time 256", "org.bluetooth.characteristic.exact_time_256"),
    UuidRecord::new(0x2A0D, "DST Offset", "org.bluetooth.characteristic.dst_offset"),
    UuidRecord::new(0x2A0E, "Time Zone", "org.bluetooth.characteristic.time_zone"),
    UuidRecord::new(0x2A0F, "Local Time Information", "org.bluetooth.characteristic.local_time_information"),
    UuidRecord::new(0x2A12, "Time Accuracy", "org.bluetooth.characteristic.time_accuracy"),
    UuidRecord::new(0x2A13, "Time Source", "org.bluetooth.characteristic.time_source"),
    UuidRecord::new(0x2A14, "Reference Time Information", "org.bluetooth.characteristic.reference_time_information"),
    UuidRecord::new(0x2A18, "Glucose Measurement", "org.bluetooth.characteristic.glucose_measurement"),
    UuidRecord::new(0x2A19, "Battery Level", "org.bluetooth.characteristic.battery_level"),
    UuidRecord::new(0x2A1A, "Battery Power State", "org.bluetooth.characteristic.battery_power_state"),
    UuidRecord::new(0x2A1C, "Temperature Measurement", "org.bluetooth.characteristic.temperature_measurement"),
    UuidRecord::new(0x2A1D, "Temperature Type", "org.bluetooth.characteristic.temperature_type"),
    UuidRecord::new(0x2A1E, "Intermediate Temperature", "org.bluetooth.characteristic.intermediate_temperature"),
    UuidRecord::new(0x2A1F, "Temperature Celsius", "org.bluetooth.characteristic.temperature_celsius"),
    UuidRecord::new(0x2A20, "Temperature Fahrenheit", "org.bluetooth.characteristic.temperature_fahrenheit"),
    UuidRecord::new(0x2A21, "Measurement Interval", "org.bluetooth.characteristic.measurement_interval"),
    UuidRecord::new(0x2A22, "Boot Keyboard Input Report", "org.bluetooth.characteristic.boot_keyboard_input_report"),
    UuidRecord::new(0x2A23, "System ID", "org.bluetooth.characteristic.system_id"),
    UuidRecord::new(0x2A24, "Model Number String", "org.bluetooth.characteristic.model_number_string"),
    UuidRecord::new(0x2A25, "Serial Number String", "org.bluetooth.characteristic.serial_number_string"),
    UuidRecord::new(0x2A26, "Firmware Revision String", "org.bluetooth.characteristic.firmware_revision_string"),
    UuidRecord::new(0x2A27, "Hardware Revision String", "org.bluetooth.characteristic.hardware_revision_string"),
    UuidRecord::new(0x2A28, "Software Revision String", "org.bluetooth.characteristic.software_revision_string"),
    UuidRecord::new(0x2A29, "Manufacturer Name String", "org.bluetooth.characteristic.manufacturer_name_string"),
    UuidRecord::new(0x2A2A, "IEEE 11073-20601 Regulatory Certification Data List", "org.bluetooth.characteristic.ieee_11073-20601_regulatory_certification_data_list"),
    UuidRecord::new(0x2A2B, "Current Time", "org.bluetooth.characteristic.current_time"),
    UuidRecord::new(0x2A2C, "Magnetic Declination", "org.bluetooth.characteristic.magnetic_declination"),
    UuidRecord::new(0x2A31, "Scan Refresh", "org.bluetooth.characteristic.scan_refresh"),
    UuidRecord::new(0x2A32, "Boot Keyboard Output Report", "org.bluetooth.characteristic.boot_keyboard_output_report"),
    UuidRecord::new(0x2A33, "Boot Mouse Input Report", "org.bluetooth.characteristic.boot_mouse_input_report"),
    UuidRecord::new(0x2A34, "Glucose Measurement Context", "org.bluetooth.characteristic.glucose_measurement_context"),
    UuidRecord::new(0x2A35, "Blood Pressure Measurement", "org.bluetooth.characteristic.blood_pressure_measurement"),
    UuidRecord::new(0x2A36, "Intermediate Cuff Pressure", "org.bluetooth.characteristic.intermediate_cuff_pressure"),
    UuidRecord::new(0x2A37, "Heart Rate Measurement", "org.bluetooth.characteristic.heart_rate_measurement"),
    UuidRecord::new(0x2A38, "Body Sensor Location", "org.bluetooth.characteristic.body_sensor_location"),
    UuidRecord::new(0x2A39, "Heart Rate Control Point", "org.bluetooth.characteristic.heart_rate_control_point"),
    UuidRecord::new(0x2A3F, "Alert Status", "org.bluetooth.characteristic.alert_status"),
    UuidRecord::new(0x2A40, "Ringer Control point", "org.bluetooth.characteristic.ringer_control_point"),
    UuidRecord::new(0x2A41, "Ringer Setting", "org.bluetooth.characteristic.ringer_setting"),
    UuidRecord::new(0x2A42, "Alert Category ID Bit Mask", "org.bluetooth.characteristic.alert_category_id_bit_mask"),
    UuidRecord::new(0x2A43, "Alert Category ID", "org.bluetooth.characteristic.alert_category_id"),
    UuidRecord::new(0x2A44, "Alert Notification Control Point", "org.bluetooth.characteristic.alert_notification_control_point"),
    UuidRecord::new(0x2A45, "Unread Alert Status", "org.bluetooth.characteristic.unread_alert_status"),
    UuidRecord::new(0x2A46, "New Alert", "org.bluetooth.characteristic.new_alert"),
    UuidRecord::new(0x2A47, "Supported New Alert Category", "org.bluetooth.characteristic.supported_new_alert_category"),
    UuidRecord::new(0x2A48, "Supported Unread Alert Category", "org.bluetooth.characteristic.supported_unread_alert_category"),
    UuidRecord::new(0x2A49, "Blood Pressure Feature", "org.bluetooth.characteristic.blood_pressure_feature"),
    UuidRecord::new(0x2A4A, "HID Information", "org.bluetooth.characteristic.hid_information"),
    UuidRecord::new(0x2A4B, "Report Map", "org.bluetooth.characteristic.report_map"),
    UuidRecord::new(0x2A4C, "HID Control Point", "org.bluetooth.characteristic.hid_control_point"),
    UuidRecord::new(0x2A4D, "Report", "org.bluetooth.characteristic.report"),
    UuidRecord::new(0x2A4E, "Protocol Mode", "org.bluetooth.characteristic.protocol_mode"),
    UuidRecord::new(0x2A4F, "Scan Interval Window", "org.bluetooth.characteristic.scan_interval_window"),
    UuidRecord::new(0x2A50, "PnP ID", "org.bluetooth.characteristic.pnp_id"),
    UuidRecord::new(0x2A51, "Glucose Feature", "org.bluetooth.characteristic.glucose_feature"),
    UuidRecord::new(0x2A52, "Record Access Control Point", "org.bluetooth.characteristic.record_access_control_point"),
    UuidRecord::new(0x2A53, "RSC Measurement", "org.bluetooth.characteristic.rsc_measurement"),
    UuidRecord::new(0x2A54, "RSC Feature", "org.bluetooth.characteristic.rsc_feature"),
    UuidRecord::new(0x2A55, "SC Control Point", "org.bluetooth.characteristic.sc_control_point"),
    UuidRecord::new(0x2A5B, "CSC Measurement", "org.bluetooth.characteristic.csc_measurement"),
    UuidRecord::new(0x2A5C, "CSC Feature", "org.bluetooth.characteristic.csc_feature"),
    UuidRecord::new(0x2A5D, "Sensor Location", "org.bluetooth.characteristic.sensor_location"),
    UuidRecord::new(0x2A5E, "PLX Spot-Check Measurement", "org.bluetooth.characteristic.plx_spot_check_measurement"),
    UuidRecord::new(0x2A5F, "PLX Continuous Measurement", "org.bluetooth.characteristic.plx_continuous_measurement"),
    UuidRecord::new(0x2A60, "PLX Features", "org.bluetooth.characteristic.plx_features"),
    UuidRecord::new(0x2A63, "Cycling Power Measurement", "org.bluetooth.characteristic.cycling_power_measurement"),
    UuidRecord::new(0x2A65, "Cycling Power Feature", "org.bluetooth.characteristic.cycling_power_feature"),
    UuidRecord::new(0x2A66, "Cycling Power Control Point", "org.bluetooth.characteristic.cycling_power_control_point"),
    UuidRecord::new(0x2A67, "Location and Speed Characteristic", "org.bluetooth.characteristic.location_and_speed"),
    UuidRecord::new(0x2A68, "Navigation", "org.bluetooth.characteristic.navigation"),
    UuidRecord::new(0x2A69, "Position Quality", "org.bluetooth.characteristic.position_quality"),
    UuidRecord::new(0x2A6A, "LN Feature", "org.bluetooth.characteristic.ln_feature"),
    UuidRecord::new(0x2A6B, "LN Control Point", "org.bluetooth.characteristic.ln_control_point"),
    UuidRecord::new(0x2A6C, "Elevation", "org.bluetooth.characteristic.elevation"),
    UuidRecord::new(0x2A6D, "Pressure", "org.bluetooth.characteristic.pressure"),
    UuidRecord::new(0x2A6E, "Temperature", "org.bluetooth.characteristic.temperature"),
    UuidRecord::new(0x2A6F, "Humidity", "org.bluetooth.characteristic.humidity"),
    UuidRecord::new(0x2A70, "True Wind Speed", "org.bluetooth.characteristic.true_wind_speed"),
    UuidRecord::new(0x2A71, "True Wind Direction", "org.bluetooth.characteristic.true_wind_direction"),
    UuidRecord::new(0x2A72, "Apparent Wind Speed", "org.bluetooth.characteristic.apparent_wind_speed"),
    UuidRecord::new(0x2A73, "Apparent Wind Direction", "org.bluetooth.characteristic.apparent_wind_direction"),
    UuidRecord::new(0x2A74, "Gust Factor", "org.bluetooth.characteristic.gust_factor"),
    UuidRecord::new(0x2A75, "Pollen Concentration", "org.bluetooth.characteristic.pollen_concentration"),
    UuidRecord::new(0x2A76, "UV Index", "org.bluetooth.characteristic.uv_index"),
    UuidRecord::new(0x2A77, "Irradiance", "org.bluetooth.characteristic.irradiance"),
    UuidRecord::new(0x2A78, "Rainfall", "org.bluetooth.characteristic.rainfall"),
    UuidRecord::new(0x2A79, "Wind Chill", "org.bluetooth.characteristic.wind_chill"),
    UuidRecord::new(0x2A7A, "Heat Index", "org.bluetooth.characteristic.heat_index"),
    UuidRecord::new(0x2A7B, "Dew Point", "org.bluetooth.characteristic.dew_point"),
    UuidRecord::new(0x2A9B, "Body Composition Feature", "org.bluetooth.characteristic.body_composition_feature"),
    UuidRecord::new(0x2A9C, "Body Composition Measurement", "org.bluetooth.characteristic.body_composition_measurement"),
    UuidRecord::new(0x2A9D, "Weight Measurement", "org.bluetooth.characteristic.weight_measurement"),
    UuidRecord::new(0x2A9E, "Weight Scale Feature", "org.bluetooth.characteristic.weight_scale_feature"),
    UuidRecord::new(0x2A9F, "User Control Point", "org.bluetooth.characteristic.user_control_point"),
    UuidRecord::new(0x2AA0, "Magnetic Flux Density - 2D", "org.bluetooth.characteristic.magnetic_flux_density_2d"),
    UuidRecord::new(0x2AA1, "Magnetic Flux Density - 3D", "org.bluetooth.characteristic.magnetic_flux_density_3d"),
    UuidRecord::new(0x2AA3, "Barometric Pressure Trend", "org.bluetooth.characteristic.barometric_pressure_trend"),
    UuidRecord::new(0x2AA6, "Central Address Resolution", "org.bluetooth.characteristic.gap.central_address_resolution"),
    UuidRecord::new(0x2AE0, "Average Current", "org.bluetooth.characteristic.average_current"),
    UuidRecord::new(0x2AE1, "Average Voltage", "org.bluetooth.characteristic.average_voltage"),
    UuidRecord::new(0x2AE2, "Boolean", "org.bluetooth.characteristic.boolean"),
    UuidRecord::new(0x2AE4, "Chromaticity Coordinates", "org.bluetooth.characteristic.chromaticity_coordinates"),
    UuidRecord::new(0x2AE7, "Color Rendering Index", "org.bluetooth.characteristic.color_rendering_index"),
    UuidRecord::new(0x2AE8, "Coefficient", "org.bluetooth.characteristic.coefficient"),
    UuidRecord::new(0x2AE9, "Correlated Color Temperature", "org.bluetooth.characteristic.correlated_color_temperature"),
    UuidRecord::new(0x2AEA, "Count 16", "org.bluetooth.characteristic.count_16"),
    UuidRecord::new(0x2AEB, "Count 24", "org.bluetooth.characteristic.count_24"),
    UuidRecord::new(0x2AEC, "Country Code", "org.bluetooth.characteristic.country_code"),
    UuidRecord::new(0x2AED, "Date UTC", "org.bluetooth.characteristic.date_utc"),
    UuidRecord::new(0x2AEE, "Electric Current", "org.bluetooth.characteristic.electric_current"),
    UuidRecord::new(0x2AEF, "Electric Current Range", "org.bluetooth.characteristic.electric_current_range"),
    UuidRecord::new(0x2AF0, "Electric Current Specification", "org.bluetooth.characteristic.electric_current_specification"),
    UuidRecord::new(0x2AF1, "Electric Current Statistics", "org.bluetooth.characteristic.electric_current_statistics"),
    UuidRecord::new(0x2AF2, "Energy", "org.bluetooth.characteristic.energy"),
    UuidRecord::new(0x2AF5, "Fixed String 16", "org.bluetooth.characteristic.fixed_string_16"),
    UuidRecord::new(0x2AF6, "Fixed String 24", "org.bluetooth.characteristic.fixed_string_24"),
    UuidRecord::new(0x2AF7, "Fixed String 36", "org.bluetooth.characteristic.fixed_string_36"),
    UuidRecord::new(0x2AF8, "Fixed String 8", "org.bluetooth.characteristic.fixed_string_8"),
    UuidRecord::new(0x2AF9, "Generic Level", "org.bluetooth.characteristic.generic_level"),
    UuidRecord::new(0x2AFA, "Global Trade Item Number", "org.bluetooth.characteristic.global_trade_item_number"),
    UuidRecord::new(0x2AFB, "Illuminance", "org.bluetooth.characteristic.illuminance"),
    UuidRecord::new(0x2AFC, "Luminous Efficacy", "org.bluetooth.characteristic.luminous_efficacy"),
    UuidRecord::new(0x2AFD, "Luminous Energy", "org.bluetooth.characteristic.luminous_energy"),
    UuidRecord::new(0x2AFE, "Luminous Exposure", "org.bluetooth.characteristic.luminous_exposure"),
    UuidRecord::new(0x2AFF, "Luminous Flux", "org.bluetooth.characteristic.luminous_flux"),
    UuidRecord::new(0x2B01, "Luminous Intensity", "org.bluetooth.characteristic.luminous_intensity"),
    UuidRecord::new(0x2B02, "Mass Flow", "org.bluetooth.characteristic.mass_flow"),
    UuidRecord::new(0x2B03, "Perceived Lightness", "org.bluetooth.characteristic.perceived_lightness"),
    UuidRecord::new(0x2B04, "Percentage 8", "org.bluetooth.characteristic.percentage_8"),
    UuidRecord::new(0x2B05, "Power", "org.bluetooth.characteristic.power"),
    UuidRecord::new(0x2B18, "Voltage", "org.bluetooth.characteristic.voltage"),
    UuidRecord::new(0x2B19, "Voltage Specification", "org.bluetooth.characteristic.voltage_specification"),
    UuidRecord::new(0x2B1A, "Voltage Statistics", "org.bluetooth.characteristic.voltage_statistics"),
    UuidRecord::new(0x2B1B, "Volume Flow", "org.bluetooth.characteristic.volume_flow"),
    UuidRecord::new(0x2B29, "Client Supported Features", "org.bluetooth.characteristic.client_supported_features"),
    UuidRecord::new(0x2B2A, "Database Hash", "org.bluetooth.characteristic.database_hash"),
    UuidRecord::new(0x2B3A, "Server Supported Features", "org.bluetooth.characteristic.server_supported_features"),
    UuidRecord::new(0x2B8C, "CO2 Concentration", "org.bluetooth.characteristic.co2_concentration"),
    UuidRecord::new(0x2BCF, "Ammonia Concentration", "org.bluetooth.characteristic.ammonia_concentration"),
    UuidRecord::new(0x2BD0, "Carbon Monoxide Concentration", "org.bluetooth.characteristic.carbon_monoxide_concentration"),
    UuidRecord::new(0x2BD1, "Methane Concentration", "org.bluetooth.characteristic.methane_concentration"),
    UuidRecord::new(0x2BD2, "Nitrogen Dioxide Concentration", "org.bluetooth.characteristic.nitrogen_dioxide_concentration"),
    UuidRecord::new(0x2BD3, "Non-Methane Volatile Organic Compounds Concentration", "org.bluetooth.characteristic.non-methane_volatile_organic_compounds_concentration"),
    UuidRecord::new(0x2BD4, "Ozone Concentration", "org.bluetooth.characteristic.ozone_concentration"),
    UuidRecord::new(0x2BD5, "Particulate Matter - PM1 Concentration", "org.bluetooth.characteristic.particulate_matter_pm1_concentration"),
    UuidRecord::new(0x2BD6, "Particulate Matter - PM2.5 Concentration", "org.bluetooth.characteristic.particulate_matter_pm2_5_concentration"),
    UuidRecord::new(0x2BD7, "Particulate Matter - PM10 Concentration", "org.bluetooth.characteristic.particulate_matter_pm10_concentration"),
    UuidRecord::new(0x2BD8, "Sulfur Dioxide Concentration", "org.bluetooth.characteristic.sulfur_dioxide_concentration"),
    UuidRecord::new(0x2BD9, "Sulfur Hexafluoride Concentration", "org.bluetooth.characteristic.sulfur_hexafluoride_concentration"),
    UuidRecord::new(0x2BE7, "VOC Concentration", "org.bluetooth.characteristic.voc_concentration"),
];
