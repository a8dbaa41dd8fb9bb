//! Channel offsets by (CS, SW) position, named after the datasheet pins.
//!
//! Offsets follow the register order of the datasheet, not the physical
//! position of the LED on the board.

pub const CS1_SW1: u8 = 0x00;
pub const CS2_SW1: u8 = 0x01;
pub const CS3_SW1: u8 = 0x02;
pub const CS4_SW1: u8 = 0x03;
pub const CS5_SW1: u8 = 0x04;
pub const CS6_SW1: u8 = 0x05;
pub const CS7_SW1: u8 = 0x06;
pub const CS8_SW1: u8 = 0x07;
pub const CS9_SW1: u8 = 0x08;
pub const CS10_SW1: u8 = 0x09;
pub const CS11_SW1: u8 = 0x0A;
pub const CS12_SW1: u8 = 0x0B;
pub const CS13_SW1: u8 = 0x0C;
pub const CS14_SW1: u8 = 0x0D;
pub const CS15_SW1: u8 = 0x0E;
pub const CS16_SW1: u8 = 0x0F;
pub const CS17_SW1: u8 = 0x10;
pub const CS18_SW1: u8 = 0x11;

pub const CS1_SW2: u8 = 0x12;
pub const CS2_SW2: u8 = 0x13;
pub const CS3_SW2: u8 = 0x14;
pub const CS4_SW2: u8 = 0x15;
pub const CS5_SW2: u8 = 0x16;
pub const CS6_SW2: u8 = 0x17;
pub const CS7_SW2: u8 = 0x18;
pub const CS8_SW2: u8 = 0x19;
pub const CS9_SW2: u8 = 0x1A;
pub const CS10_SW2: u8 = 0x1B;
pub const CS11_SW2: u8 = 0x1C;
pub const CS12_SW2: u8 = 0x1D;
pub const CS13_SW2: u8 = 0x1E;
pub const CS14_SW2: u8 = 0x1F;
pub const CS15_SW2: u8 = 0x20;
pub const CS16_SW2: u8 = 0x21;
pub const CS17_SW2: u8 = 0x22;
pub const CS18_SW2: u8 = 0x23;

pub const CS1_SW3: u8 = 0x24;
pub const CS2_SW3: u8 = 0x25;
pub const CS3_SW3: u8 = 0x26;
pub const CS4_SW3: u8 = 0x27;
pub const CS5_SW3: u8 = 0x28;
pub const CS6_SW3: u8 = 0x29;
pub const CS7_SW3: u8 = 0x2A;
pub const CS8_SW3: u8 = 0x2B;
pub const CS9_SW3: u8 = 0x2C;
pub const CS10_SW3: u8 = 0x2D;
pub const CS11_SW3: u8 = 0x2E;
pub const CS12_SW3: u8 = 0x2F;
pub const CS13_SW3: u8 = 0x30;
pub const CS14_SW3: u8 = 0x31;
pub const CS15_SW3: u8 = 0x32;
pub const CS16_SW3: u8 = 0x33;
pub const CS17_SW3: u8 = 0x34;
pub const CS18_SW3: u8 = 0x35;

pub const CS1_SW4: u8 = 0x36;
pub const CS2_SW4: u8 = 0x37;
pub const CS3_SW4: u8 = 0x38;
pub const CS4_SW4: u8 = 0x39;
pub const CS5_SW4: u8 = 0x3A;
pub const CS6_SW4: u8 = 0x3B;
pub const CS7_SW4: u8 = 0x3C;
pub const CS8_SW4: u8 = 0x3D;
pub const CS9_SW4: u8 = 0x3E;
pub const CS10_SW4: u8 = 0x3F;
pub const CS11_SW4: u8 = 0x40;
pub const CS12_SW4: u8 = 0x41;
pub const CS13_SW4: u8 = 0x42;
pub const CS14_SW4: u8 = 0x43;
pub const CS15_SW4: u8 = 0x44;
pub const CS16_SW4: u8 = 0x45;
pub const CS17_SW4: u8 = 0x46;
pub const CS18_SW4: u8 = 0x47;

pub const CS1_SW5: u8 = 0x48;
pub const CS2_SW5: u8 = 0x49;
pub const CS3_SW5: u8 = 0x4A;
pub const CS4_SW5: u8 = 0x4B;
pub const CS5_SW5: u8 = 0x4C;
pub const CS6_SW5: u8 = 0x4D;
pub const CS7_SW5: u8 = 0x4E;
pub const CS8_SW5: u8 = 0x4F;
pub const CS9_SW5: u8 = 0x50;
pub const CS10_SW5: u8 = 0x51;
pub const CS11_SW5: u8 = 0x52;
pub const CS12_SW5: u8 = 0x53;
pub const CS13_SW5: u8 = 0x54;
pub const CS14_SW5: u8 = 0x55;
pub const CS15_SW5: u8 = 0x56;
pub const CS16_SW5: u8 = 0x57;
pub const CS17_SW5: u8 = 0x58;
pub const CS18_SW5: u8 = 0x59;

pub const CS1_SW6: u8 = 0x5A;
pub const CS2_SW6: u8 = 0x5B;
pub const CS3_SW6: u8 = 0x5C;
pub const CS4_SW6: u8 = 0x5D;
pub const CS5_SW6: u8 = 0x5E;
pub const CS6_SW6: u8 = 0x5F;
pub const CS7_SW6: u8 = 0x60;
pub const CS8_SW6: u8 = 0x61;
pub const CS9_SW6: u8 = 0x62;
pub const CS10_SW6: u8 = 0x63;
pub const CS11_SW6: u8 = 0x64;
pub const CS12_SW6: u8 = 0x65;
pub const CS13_SW6: u8 = 0x66;
pub const CS14_SW6: u8 = 0x67;
pub const CS15_SW6: u8 = 0x68;
pub const CS16_SW6: u8 = 0x69;
pub const CS17_SW6: u8 = 0x6A;
pub const CS18_SW6: u8 = 0x6B;

pub const CS1_SW7: u8 = 0x6C;
pub const CS2_SW7: u8 = 0x6D;
pub const CS3_SW7: u8 = 0x6E;
pub const CS4_SW7: u8 = 0x6F;
pub const CS5_SW7: u8 = 0x70;
pub const CS6_SW7: u8 = 0x71;
pub const CS7_SW7: u8 = 0x72;
pub const CS8_SW7: u8 = 0x73;
pub const CS9_SW7: u8 = 0x74;
pub const CS10_SW7: u8 = 0x75;
pub const CS11_SW7: u8 = 0x76;
pub const CS12_SW7: u8 = 0x77;
pub const CS13_SW7: u8 = 0x78;
pub const CS14_SW7: u8 = 0x79;
pub const CS15_SW7: u8 = 0x7A;
pub const CS16_SW7: u8 = 0x7B;
pub const CS17_SW7: u8 = 0x7C;
pub const CS18_SW7: u8 = 0x7D;

pub const CS1_SW8: u8 = 0x7E;
pub const CS2_SW8: u8 = 0x7F;
pub const CS3_SW8: u8 = 0x80;
pub const CS4_SW8: u8 = 0x81;
pub const CS5_SW8: u8 = 0x82;
pub const CS6_SW8: u8 = 0x83;
pub const CS7_SW8: u8 = 0x84;
pub const CS8_SW8: u8 = 0x85;
pub const CS9_SW8: u8 = 0x86;
pub const CS10_SW8: u8 = 0x87;
pub const CS11_SW8: u8 = 0x88;
pub const CS12_SW8: u8 = 0x89;
pub const CS13_SW8: u8 = 0x8A;
pub const CS14_SW8: u8 = 0x8B;
pub const CS15_SW8: u8 = 0x8C;
pub const CS16_SW8: u8 = 0x8D;
pub const CS17_SW8: u8 = 0x8E;
pub const CS18_SW8: u8 = 0x8F;

pub const CS1_SW9: u8 = 0x90;
pub const CS2_SW9: u8 = 0x91;
pub const CS3_SW9: u8 = 0x92;
pub const CS4_SW9: u8 = 0x93;
pub const CS5_SW9: u8 = 0x94;
pub const CS6_SW9: u8 = 0x95;
pub const CS7_SW9: u8 = 0x96;
pub const CS8_SW9: u8 = 0x97;
pub const CS9_SW9: u8 = 0x98;
pub const CS10_SW9: u8 = 0x99;
pub const CS11_SW9: u8 = 0x9A;
pub const CS12_SW9: u8 = 0x9B;
pub const CS13_SW9: u8 = 0x9C;
pub const CS14_SW9: u8 = 0x9D;
pub const CS15_SW9: u8 = 0x9E;
pub const CS16_SW9: u8 = 0x9F;
pub const CS17_SW9: u8 = 0xA0;
pub const CS18_SW9: u8 = 0xA1;

pub const CS1_SW10: u8 = 0xA2;
pub const CS2_SW10: u8 = 0xA3;
pub const CS3_SW10: u8 = 0xA4;
pub const CS4_SW10: u8 = 0xA5;
pub const CS5_SW10: u8 = 0xA6;
pub const CS6_SW10: u8 = 0xA7;
pub const CS7_SW10: u8 = 0xA8;
pub const CS8_SW10: u8 = 0xA9;
pub const CS9_SW10: u8 = 0xAA;
pub const CS10_SW10: u8 = 0xAB;
pub const CS11_SW10: u8 = 0xAC;
pub const CS12_SW10: u8 = 0xAD;
pub const CS13_SW10: u8 = 0xAE;
pub const CS14_SW10: u8 = 0xAF;
pub const CS15_SW10: u8 = 0xB0;
pub const CS16_SW10: u8 = 0xB1;
pub const CS17_SW10: u8 = 0xB2;
pub const CS18_SW10: u8 = 0xB3;

pub const CS1_SW11: u8 = 0xB4;
pub const CS2_SW11: u8 = 0xB5;
pub const CS3_SW11: u8 = 0xB6;
pub const CS4_SW11: u8 = 0xB7;
pub const CS5_SW11: u8 = 0xB8;
pub const CS6_SW11: u8 = 0xB9;
pub const CS7_SW11: u8 = 0xBA;
pub const CS8_SW11: u8 = 0xBB;
pub const CS9_SW11: u8 = 0xBC;
pub const CS10_SW11: u8 = 0xBD;
pub const CS11_SW11: u8 = 0xBE;
pub const CS12_SW11: u8 = 0xBF;
pub const CS13_SW11: u8 = 0xC0;
pub const CS14_SW11: u8 = 0xC1;
pub const CS15_SW11: u8 = 0xC2;
pub const CS16_SW11: u8 = 0xC3;
pub const CS17_SW11: u8 = 0xC4;
pub const CS18_SW11: u8 = 0xC5;
