//! GAP assigned numbers: AD types, appearance categories, company
//! identifiers and URI scheme codes

pub(super) static AD_TYPES: &[(u8, &str)] = &[
    (0x01, "Flags"),
    (0x02, "Incomplete List of 16-bit Service UUIDs"),
    (0x03, "Complete List of 16-bit Service UUIDs"),
    (0x04, "Incomplete List of 32-bit Service UUIDs"),
    (0x05, "Complete List of 32-bit Service UUIDs"),
    (0x06, "Incomplete List of 128-bit Service UUIDs"),
    (0x07, "Complete List of 128-bit Service UUIDs"),
    (0x08, "Shortened Local Name"),
    (0x09, "Complete Local Name"),
    (0x0A, "Tx Power Level"),
    (0x0D, "Class of Device"),
    (0x0E, "Simple Pairing Hash C-192"),
    (0x0F, "Simple Pairing Randomizer R-192"),
    (0x10, "Device ID"),
    (0x11, "Security Manager Out of Band Flags"),
    (0x12, "Peripheral Connection Interval Range"),
    (0x14, "List of 16-bit Service Solicitation UUIDs"),
    (0x15, "List of 128-bit Service Solicitation UUIDs"),
    (0x16, "Service Data - 16-bit UUID"),
    (0x17, "Public Target Address"),
    (0x18, "Random Target Address"),
    (0x19, "Appearance"),
    (0x1A, "Advertising Interval"),
    (0x1B, "LE Bluetooth Device Address"),
    (0x1C, "LE Role"),
    (0x1D, "Simple Pairing Hash C-256"),
    (0x1E, "Simple Pairing Randomizer R-256"),
    (0x1F, "List of 32-bit Service Solicitation UUIDs"),
    (0x20, "Service Data - 32-bit UUID"),
    (0x21, "Service Data - 128-bit UUID"),
    (0x22, "LE Secure Connections Confirmation Value"),
    (0x23, "LE Secure Connections Random Value"),
    (0x24, "URI"),
    (0x25, "Indoor Positioning"),
    (0x26, "Transport Discovery Data"),
    (0x27, "LE Supported Features"),
    (0x28, "Channel Map Update Indication"),
    (0x29, "PB-ADV"),
    (0x2A, "Mesh Message"),
    (0x2B, "Mesh Beacon"),
    (0x2C, "BIGInfo"),
    (0x2D, "Broadcast_Code"),
    (0x2E, "Resolvable Set Identifier"),
    (0x2F, "Advertising Interval - long"),
    (0x30, "Broadcast_Name"),
    (0x31, "Encrypted Advertising Data"),
    (0x32, "Periodic Advertising Response Timing Information"),
    (0x34, "Electronic Shelf Label"),
    (0x3D, "3D Information Data"),
    (0xFF, "Manufacturer Specific Data"),
];

pub(super) static APPEARANCE_CATEGORIES: &[(u16, &str)] = &[
    (0, "Unknown"),
    (1, "Phone"),
    (2, "Computer"),
    (3, "Watch"),
    (4, "Clock"),
    (5, "Display"),
    (6, "Remote Control"),
    (7, "Eye-glasses"),
    (8, "Tag"),
    (9, "Keyring"),
    (10, "Media Player"),
    (11, "Barcode Scanner"),
    (12, "Thermometer"),
    (13, "Heart Rate Sensor"),
    (14, "Blood Pressure"),
    (15, "Human Interface Device"),
    (16, "Glucose Meter"),
    (17, "Running Walking Sensor"),
    (18, "Cycling"),
    (19, "Control Device"),
    (20, "Network Device"),
    (21, "Sensor"),
    (22, "Light Fixtures"),
    (23, "Fan"),
    (24, "HVAC"),
    (25, "Air Conditioning"),
    (26, "Humidifier"),
    (27, "Heating"),
    (28, "Access Control"),
    (29, "Motorized Device"),
    (30, "Power Device"),
    (31, "Light Source"),
    (32, "Window Covering"),
    (33, "Audio Sink"),
    (34, "Audio Source"),
    (35, "Motorized Vehicle"),
    (36, "Domestic Appliance"),
    (37, "Wearable Audio Device"),
    (38, "Aircraft"),
    (39, "AV Equipment"),
    (40, "Display Equipment"),
    (41, "Hearing aid"),
    (42, "Gaming"),
    (43, "Signage"),
    (49, "Pulse Oximeter"),
    (50, "Weight Scale"),
    (51, "Personal Mobility Device"),
    (52, "Continuous Glucose Monitor"),
    (53, "Insulin Pump"),
    (54, "Medication Delivery"),
    (55, "Spirometer"),
    (81, "Outdoor Sports Activity"),
];

pub(super) static COMPANIES: &[(u16, &str)] = &[
    (0x0000, "Ericsson AB"),
    (0x0001, "Nokia Mobile Phones"),
    (0x0002, "Intel Corp."),
    (0x0003, "IBM Corp."),
    (0x0004, "Toshiba Corp."),
    (0x0006, "Microsoft"),
    (0x000D, "Texas Instruments Inc."),
    (0x000F, "Broadcom Corporation"),
    (0x0030, "ST Microelectronics"),
    (0x004C, "Apple, Inc."),
    (0x0059, "Nordic Semiconductor ASA"),
    (0x005D, "Realtek Semiconductor Corporation"),
    (0x006B, "Polar Electro OY"),
    (0x0075, "Samsung Electronics Co. Ltd."),
    (0x0087, "Garmin International, Inc."),
    (0x00E0, "Google"),
    (0x0157, "Anhui Huami Information Technology Co., Ltd."),
    (0x0171, "Amazon.com Services, LLC"),
    (0x02E5, "Espressif Systems (Shanghai) Co., Ltd."),
    (0x038F, "Xiaomi Inc."),
    (0x0499, "Ruuvi Innovations Ltd."),
];

/// Scheme codes start at `0x01`, the empty scheme
pub(super) static URI_SCHEMES: &[(u8, &str)] = &[
    (0x01, ""),
    (0x02, "aaa:"),
    (0x03, "aaas:"),
    (0x04, "about:"),
    (0x05, "acap:"),
    (0x06, "acct:"),
    (0x07, "cap:"),
    (0x08, "cid:"),
    (0x09, "coap:"),
    (0x0A, "coaps:"),
    (0x0B, "crid:"),
    (0x0C, "data:"),
    (0x0D, "dav:"),
    (0x0E, "dict:"),
    (0x0F, "dns:"),
    (0x10, "file:"),
    (0x11, "ftp:"),
    (0x12, "geo:"),
    (0x13, "go:"),
    (0x14, "gopher:"),
    (0x15, "h323:"),
    (0x16, "http:"),
    (0x17, "https:"),
    (0x18, "iax:"),
    (0x19, "icap:"),
    (0x1A, "im:"),
    (0x1B, "imap:"),
    (0x1C, "info:"),
    (0x1D, "ipp:"),
    (0x1E, "ipps:"),
    (0x1F, "iris:"),
    (0x20, "iris.beep:"),
    (0x21, "iris.xpc:"),
    (0x22, "iris.xpcs:"),
    (0x23, "iris.lwz:"),
    (0x24, "jabber:"),
    (0x25, "ldap:"),
    (0x26, "mailto:"),
    (0x27, "mid:"),
    (0x28, "msrp:"),
    (0x29, "msrps:"),
    (0x2A, "mtqp:"),
    (0x2B, "mupdate:"),
    (0x2C, "news:"),
    (0x2D, "nfs:"),
    (0x2E, "ni:"),
    (0x2F, "nih:"),
    (0x30, "nntp:"),
    (0x31, "opaquelocktoken:"),
    (0x32, "pop:"),
    (0x33, "pres:"),
    (0x34, "reload:"),
    (0x35, "rtsp:"),
    (0x36, "rtsps:"),
    (0x37, "rtspu:"),
    (0x38, "service:"),
    (0x39, "session:"),
    (0x3A, "shttp:"),
    (0x3B, "sieve:"),
    (0x3C, "sip:"),
    (0x3D, "sips:"),
    (0x3E, "sms:"),
    (0x3F, "snmp:"),
    (0x40, "soap.beep:"),
    (0x41, "soap.beeps:"),
    (0x42, "stun:"),
    (0x43, "stuns:"),
    (0x44, "tag:"),
    (0x45, "tel:"),
    (0x46, "telnet:"),
    (0x47, "tftp:"),
    (0x48, "thismessage:"),
    (0x49, "tn3270:"),
    (0x4A, "tip:"),
    (0x4B, "turn:"),
    (0x4C, "turns:"),
    (0x4D, "tv:"),
    (0x4E, "urn:"),
    (0x4F, "vemmi:"),
    (0x50, "ws:"),
    (0x51, "wss:"),
    (0x52, "xcon:"),
    (0x53, "xcon-userid:"),
    (0x54, "xmlrpc.beep:"),
    (0x55, "xmlrpc.beeps:"),
    (0x56, "xmpp:"),
    (0x57, "z39.50r:"),
    (0x58, "z39.50s:"),
];
